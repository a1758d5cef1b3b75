use std::path::PathBuf;

use anyhow::{Context, Result};

/// Get the default Claude data directory (~/.claude)
pub fn default_claude_dir() -> Result<PathBuf> {
    let home = dirs::home_dir().context("Failed to determine home directory")?;
    Ok(home.join(".claude"))
}

#[cfg(test)]
mod tests {
    use std::env;

    use super::*;

    #[test]
    fn test_default_claude_dir_follows_home() {
        // Save original HOME value
        let original_home = env::var("HOME").ok();

        // SAFETY: Setting environment variables in tests is safe as long as:
        // 1. Tests don't run in parallel accessing the same env var (we restore it)
        // 2. No other threads are reading this variable concurrently
        // 3. We restore the original value afterwards
        unsafe {
            env::set_var("HOME", "/Users/testuser");
        }

        let result = default_claude_dir();
        assert!(result.is_ok());
        assert_eq!(result.unwrap(), PathBuf::from("/Users/testuser/.claude"));

        // Restore original HOME
        if let Some(home) = original_home {
            unsafe {
                env::set_var("HOME", home);
            }
        }
    }
}
