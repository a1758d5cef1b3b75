use anyhow::Result;

fn main() -> Result<()> {
    ai_prompt_archive::cli::run()
}
