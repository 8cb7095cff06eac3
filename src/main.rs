use std::path::PathBuf;

use pwcompose::{
    settings::{read_config, xdg_config_file_location},
    CompositeGenerator, PasswordGenerator,
};

const ENV_PREFIX: &str = "PWCOMPOSE";
const DEMO_DEFAULT_LENGTH: i64 = 16;

fn main() -> anyhow::Result<()> {
    env_logger::init();

    let home = std::env::var_os("HOME").map(PathBuf::from);
    let xdg_config_home = std::env::var_os("XDG_CONFIG_HOME").map(PathBuf::from);
    let config_file = match xdg_config_file_location(&home, &xdg_config_home) {
        Ok(path) => Some(path),
        Err(err) => {
            log::warn!("not reading a settings file: {err}");
            None
        }
    };

    let settings = read_config(&config_file, ENV_PREFIX, DEMO_DEFAULT_LENGTH)?;
    println!("{}", settings.default_length());

    let generator = CompositeGenerator::standard(&settings);
    let password = generator.generate()?;

    println!("Generated password:{password}");
    println!("Size of generated password:{}", password.chars().count());

    println!();
    println!("New password (1):{}", generator.generate()?);
    println!("New password (2):{}", generator.generate()?);
    Ok(())
}
