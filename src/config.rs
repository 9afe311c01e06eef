use clap::Parser;

use crate::consts::*;

/// Advertise the example service over BLE.
#[derive(Debug, Clone, Parser)]
#[command(version, about)]
pub struct Args {
    /// Advertised local name
    #[arg(long, default_value = DEFAULT_DEVICE_NAME)]
    pub name: String,

    /// Device Information manufacturer string
    #[arg(long, default_value = DEFAULT_MANUFACTURER)]
    pub manufacturer: String,

    /// Device Information model string
    #[arg(long, default_value = DEFAULT_MODEL)]
    pub model: String,

    /// Counter increment period in milliseconds
    #[arg(long, default_value_t = DEFAULT_INTERVAL_MS, value_parser = clap::value_parser!(u64).range(1..))]
    pub interval_ms: u64,

    /// Print the identifier table and exit
    #[arg(long)]
    pub print_uuids: bool,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults() {
        let args = Args::try_parse_from(["blexample"]).unwrap();
        assert_eq!(args.name, DEFAULT_DEVICE_NAME);
        assert_eq!(args.interval_ms, DEFAULT_INTERVAL_MS);
        assert!(!args.print_uuids);
    }

    #[test]
    fn zero_interval_rejected() {
        assert!(Args::try_parse_from(["blexample", "--interval-ms", "0"]).is_err());
    }
}
