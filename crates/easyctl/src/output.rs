use clap::ValueEnum;
use comfy_table::{presets::UTF8_FULL, ContentArrangement, Table};
use easyctl_frame::{Action, Channel, ChannelMask, DeviceStatus};
use serde::Serialize;

#[derive(Clone, Debug, Copy, ValueEnum)]
pub enum OutputFormat {
    Pretty,
    Table,
    Json,
    Raw,
}

#[derive(Serialize)]
struct ChannelState {
    channel: u8,
    learned: bool,
}

#[derive(Serialize)]
struct CheckOutput {
    mask: String,
    learned: Vec<u8>,
    channels: Vec<ChannelState>,
}

#[derive(Serialize)]
struct StatusOutput<'a> {
    channel: u8,
    code: u8,
    status: &'a str,
}

#[derive(Serialize)]
struct SendOutput<'a> {
    channel: u8,
    command: &'a str,
    key_code: u8,
}

pub fn render_channels(mask: ChannelMask, format: OutputFormat) -> String {
    match format {
        OutputFormat::Pretty => Channel::all()
            .map(|channel| {
                if mask.is_learned(channel) {
                    format!("[+] Channel {channel} is learned.")
                } else {
                    format!("[-] Channel {channel} is not learned.")
                }
            })
            .collect::<Vec<_>>()
            .join("\n"),
        OutputFormat::Table => {
            let mut table = Table::new();
            table
                .load_preset(UTF8_FULL)
                .set_content_arrangement(ContentArrangement::Dynamic)
                .set_header(vec!["CHANNEL", "LEARNED"]);
            for channel in Channel::all() {
                let learned = if mask.is_learned(channel) { "yes" } else { "no" };
                table.add_row(vec![channel.to_string(), learned.to_string()]);
            }
            table.to_string()
        }
        OutputFormat::Json => {
            let out = CheckOutput {
                mask: mask.to_string(),
                learned: mask.learned().map(Channel::number).collect(),
                channels: Channel::all()
                    .map(|channel| ChannelState {
                        channel: channel.number(),
                        learned: mask.is_learned(channel),
                    })
                    .collect(),
            };
            serde_json::to_string(&out).unwrap_or_else(|_| "{}".to_string())
        }
        OutputFormat::Raw => format!("{:04X}", mask.bits()),
    }
}

pub fn render_status(
    channel: Channel,
    status: DeviceStatus,
    verbose: bool,
    format: OutputFormat,
) -> String {
    match format {
        OutputFormat::Pretty if verbose => {
            format!("Data received: {:02X} ({status})", status.code())
        }
        OutputFormat::Pretty => status.to_string(),
        OutputFormat::Table => {
            let mut table = Table::new();
            table
                .load_preset(UTF8_FULL)
                .set_content_arrangement(ContentArrangement::Dynamic)
                .set_header(vec!["CHANNEL", "CODE", "STATUS"])
                .add_row(vec![
                    channel.to_string(),
                    format!("0x{:02X}", status.code()),
                    status.to_string(),
                ]);
            table.to_string()
        }
        OutputFormat::Json => {
            let out = StatusOutput {
                channel: channel.number(),
                code: status.code(),
                status: status.description(),
            };
            serde_json::to_string(&out).unwrap_or_else(|_| "{}".to_string())
        }
        OutputFormat::Raw => format!("{:02X}", status.code()),
    }
}

/// Send has no response; only JSON output reports what was sent.
pub fn render_sent(channel: Channel, action: Action, format: OutputFormat) -> Option<String> {
    match format {
        OutputFormat::Json => {
            let out = SendOutput {
                channel: channel.number(),
                command: action.keyword(),
                key_code: action.key_code(),
            };
            Some(serde_json::to_string(&out).unwrap_or_else(|_| "{}".to_string()))
        }
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn pretty_channel_listing() {
        let text = render_channels(ChannelMask::from_bits(0x0101), OutputFormat::Pretty);
        let lines: Vec<&str> = text.lines().collect();

        assert_eq!(lines.len(), 16);
        assert_eq!(lines[0], "[+] Channel 1 is learned.");
        assert_eq!(lines[1], "[-] Channel 2 is not learned.");
        assert_eq!(lines[8], "[+] Channel 9 is learned.");
    }

    #[test]
    fn json_channel_listing() {
        let text = render_channels(ChannelMask::from_bits(0x8001), OutputFormat::Json);
        let value: serde_json::Value = serde_json::from_str(&text).unwrap();

        assert_eq!(value["mask"], "0x8001");
        assert_eq!(value["learned"], serde_json::json!([1, 16]));
        assert_eq!(value["channels"].as_array().unwrap().len(), 16);
    }

    #[test]
    fn raw_channel_mask() {
        assert_eq!(
            render_channels(ChannelMask::from_bits(0x00FF), OutputFormat::Raw),
            "00FF"
        );
    }

    #[test]
    fn status_pretty_and_verbose() {
        let channel = Channel::new(1).unwrap();
        let status = DeviceStatus::from_byte(0x0A);

        assert_eq!(
            render_status(channel, status, false, OutputFormat::Pretty),
            "Moving up"
        );
        assert_eq!(
            render_status(channel, status, true, OutputFormat::Pretty),
            "Data received: 0A (Moving up)"
        );
    }

    #[test]
    fn status_json() {
        let text = render_status(
            Channel::new(4).unwrap(),
            DeviceStatus::from_byte(0x42),
            false,
            OutputFormat::Json,
        );
        let value: serde_json::Value = serde_json::from_str(&text).unwrap();

        assert_eq!(value["channel"], 4);
        assert_eq!(value["code"], 0x42);
        assert_eq!(value["status"], "Unknown");
    }

    #[test]
    fn sent_only_reported_as_json() {
        let channel = Channel::new(2).unwrap();
        assert!(render_sent(channel, Action::Up, OutputFormat::Pretty).is_none());

        let text = render_sent(channel, Action::Down, OutputFormat::Json).unwrap();
        assert!(text.contains("\"command\":\"down\""));
        assert!(text.contains("\"key_code\":64"));
    }
}
