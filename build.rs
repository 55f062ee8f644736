use std::env;
use std::fs;
use std::path::Path;

// Variables que lee config.rs con option_env!
const CONFIG_KEYS: &[&str] = &[
    "ENVIRONMENT",
    "ENABLE_LOGGING",
    "LOG_LEVEL",
    "MOUNT_ELEMENT_ID",
    "APP_TITLE",
];

fn main() {
    println!("cargo:rerun-if-changed=build.rs");
    println!("cargo:rerun-if-changed=.env");
    for key in CONFIG_KEYS {
        println!("cargo:rerun-if-env-changed={}", key);
    }

    let env_file = Path::new(".env");
    let contents = match fs::read_to_string(env_file) {
        Ok(contents) => contents,
        Err(_) => return, // Sin .env: se usan los defaults de AppConfig
    };

    for line in contents.lines() {
        let line = line.trim();
        if line.is_empty() || line.starts_with('#') {
            continue;
        }

        let Some((key, value)) = line.split_once('=') else {
            println!("cargo:warning=Línea ignorada en .env: {}", line);
            continue;
        };
        let key = key.trim();
        let value = value.trim().trim_matches('"');

        if !CONFIG_KEYS.contains(&key) {
            println!("cargo:warning=Clave desconocida en .env: {}", key);
            continue;
        }

        // La variable del entorno real tiene prioridad sobre .env
        if env::var(key).is_err() {
            println!("cargo:rustc-env={}={}", key, value);
        }
    }
}
