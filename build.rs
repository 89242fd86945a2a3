// build.rs

use std::collections::HashMap;
use std::env;
use std::fs;
use std::path::Path;

const FALLBACK_LANG: &str = "en";

fn main() {
    // --- 1. Pick the language: `lang_*` feature first, then VOLT_LANG, then English ---
    let mut active_langs: Vec<String> = env::vars()
        .filter_map(|(key, _)| {
            key.strip_prefix("CARGO_FEATURE_LANG_")
                .map(str::to_lowercase)
        })
        .collect();
    active_langs.sort();

    let lang = match active_langs.first() {
        Some(first) => {
            if active_langs.len() > 1 {
                println!(
                    "cargo:warning=Multiple language features enabled ({:?}). Using '{}'.",
                    active_langs, first
                );
            }
            first.clone()
        }
        None => env::var("VOLT_LANG").unwrap_or_else(|_| FALLBACK_LANG.to_string()),
    };

    println!("cargo:rustc-env=VOLT_LANG_EFFECTIVE={}", lang);
    println!("cargo:rerun-if-env-changed=VOLT_LANG");
    println!("cargo:rerun-if-changed=build.rs");
    println!("cargo:rerun-if-changed=locales/");

    // --- 2. English is always loaded so every key has a value ---
    let mut translations = read_locale(FALLBACK_LANG)
        .expect("Failed to read fallback language file: locales/en.toml");

    if lang != FALLBACK_LANG {
        match read_locale(&lang) {
            Some(specific) => translations.extend(specific),
            None => println!(
                "cargo:warning=Language file 'locales/{}.toml' not found. Falling back to '{}'.",
                lang, FALLBACK_LANG
            ),
        }
    }

    // --- 3. Emit the `t!` macro; unknown keys become compile errors ---
    let mut keys: Vec<_> = translations.keys().collect();
    keys.sort();

    let mut macro_code = String::from(
        "/// Looks up a user-facing string compiled in from `locales/`.\n#[macro_export]\nmacro_rules! t {\n",
    );
    for key in keys {
        let escaped = translations[key].replace('\\', "\\\\").replace('"', "\\\"");
        macro_code.push_str(&format!("    (\"{}\") => {{ \"{}\" }};\n", key, escaped));
    }
    macro_code.push_str(
        "    ($key:expr) => {{ compile_error!(concat!(\"Missing translation key: \", $key)) }};\n",
    );
    macro_code.push('}');

    let out_dir = env::var("OUT_DIR").expect("OUT_DIR is set by cargo");
    fs::write(Path::new(&out_dir).join("translations.rs"), macro_code)
        .expect("Failed to write translations.rs");
}

fn read_locale(lang: &str) -> Option<HashMap<String, String>> {
    let path = format!("locales/{}.toml", lang);
    let content = fs::read_to_string(&path).ok()?;
    let parsed = toml::from_str(&content).unwrap_or_else(|e| panic!("Failed to parse {}: {}", path, e));
    Some(parsed)
}
