pub const CONFIG_FILE_NAME: &str = "buildall.toml";

pub const CONFIG_FILE: &str = include_str!("buildall.toml");
