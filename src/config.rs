pub const USAGE: &str = "Usage: block-crawler <JSON_RPC_ENDPOINT> <DB_FILE_PATH> <BLOCK_RANGE>";

/// Run configuration, built once from the three positional arguments and
/// passed down explicitly. No ambient state.
#[derive(Debug, Clone)]
pub struct Config {
    pub rpc_url: String,
    pub db_path: String,
    pub block_range: String,
}

impl Config {
    /// Accepts exactly the positional arguments after the program name.
    pub fn from_args<I>(args: I) -> Option<Self>
    where
        I: IntoIterator<Item = String>,
    {
        let mut args = args.into_iter();
        let rpc_url = args.next()?;
        let db_path = args.next()?;
        let block_range = args.next()?;

        if args.next().is_some() {
            return None;
        }

        Some(Self {
            rpc_url,
            db_path,
            block_range,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn strings(parts: &[&str]) -> Vec<String> {
        parts.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn three_arguments_build_a_config() {
        let config =
            Config::from_args(strings(&["http://localhost:8545", "chain.db", "1-10"])).unwrap();
        assert_eq!(config.rpc_url, "http://localhost:8545");
        assert_eq!(config.db_path, "chain.db");
        assert_eq!(config.block_range, "1-10");
    }

    #[test]
    fn wrong_arity_is_rejected() {
        assert!(Config::from_args(strings(&[])).is_none());
        assert!(Config::from_args(strings(&["http://localhost:8545", "chain.db"])).is_none());
        assert!(Config::from_args(strings(&["a", "b", "c", "d"])).is_none());
    }
}
