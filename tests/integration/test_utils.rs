//! Shared test utilities for integration tests
//!
//! Environment isolation for HOME / XDG variables and a sample project file.

use std::path::{Path, PathBuf};
use std::sync::Mutex;
use tempfile::TempDir;

/// Serializes HOME / XDG environment access across tests in this binary
static XDG_ENV_MUTEX: Mutex<()> = Mutex::new(());

/// Environment variable state to restore after test
struct EnvState {
    home: Option<String>,
    xdg_config_home: Option<String>,
}

impl EnvState {
    fn capture() -> Self {
        Self {
            home: std::env::var("HOME").ok(),
            xdg_config_home: std::env::var("XDG_CONFIG_HOME").ok(),
        }
    }

    fn restore(self) {
        if let Some(orig) = self.home {
            std::env::set_var("HOME", orig);
        } else {
            std::env::remove_var("HOME");
        }

        if let Some(orig) = self.xdg_config_home {
            std::env::set_var("XDG_CONFIG_HOME", orig);
        } else {
            std::env::remove_var("XDG_CONFIG_HOME");
        }
    }
}

/// Run `f` with HOME and XDG_CONFIG_HOME pointed into `test_dir`, restoring both afterwards.
pub fn with_xdg_env<F, R>(test_dir: &TempDir, f: F) -> R
where
    F: FnOnce() -> R,
{
    let _guard = XDG_ENV_MUTEX.lock().unwrap_or_else(|e| e.into_inner());
    let env_state = EnvState::capture();

    let test_config_home = test_dir.path().join("xdg");
    let test_home = test_dir.path().join("home");
    std::fs::create_dir_all(&test_config_home).unwrap();
    std::fs::create_dir_all(&test_home).unwrap();

    std::env::set_var("HOME", test_home.to_str().unwrap());
    std::env::set_var("XDG_CONFIG_HOME", test_config_home.to_str().unwrap());

    let result = f();

    env_state.restore();

    result
}

/// Project file used across integration tests
pub const SAMPLE_PROJECT: &str = r#"{
  "accounts": [
    {
      "name": "alice",
      "address": "0xf8d6e0586b0a20c7",
      "key": {
        "type": "hex",
        "index": 0,
        "signatureAlgorithm": "ECDSA_P256",
        "hashAlgorithm": "SHA3_256",
        "privateKey": "$ALICE_KEY"
      }
    },
    { "name": "bob", "address": "0x01cf0e2f2f715450", "key": { "privateKey": "bb11" } }
  ],
  "networks": [
    { "name": "emulator", "host": "127.0.0.1:3569" },
    { "name": "testnet", "host": "access.testnet.example:9000" }
  ],
  "contracts": [
    { "name": "HelloWorld", "source": "./cadence/HelloWorld.cdc", "network": "emulator" },
    {
      "name": "FungibleToken",
      "source": "./cadence/FungibleToken.cdc",
      "network": "testnet",
      "alias": "0x9a0766d93b6608b7"
    }
  ],
  "emulators": [],
  "deployments": [
    {
      "network": "emulator",
      "account": "alice",
      "contracts": [
        { "name": "HelloWorld", "args": [ { "type": "String", "value": "Hello" } ] }
      ]
    },
    { "network": "testnet", "account": "bob", "contracts": [ { "name": "FungibleToken" } ] }
  ]
}"#;

/// Write the sample project as confq.json under `dir` and return its path
pub fn write_sample_project(dir: &Path) -> PathBuf {
    let path = dir.join("confq.json");
    std::fs::write(&path, SAMPLE_PROJECT).unwrap();
    path
}
