//! AI assistant command.

use anyhow::Result;

use crate::assist::Assistant;
use crate::config::TomeConfig;

/// Ask the assistant for a draft answer to a knowledge-base question.
/// Always prints something — failures resolve to a fallback message.
pub async fn ask(config: &TomeConfig, question: &str, context: Option<&str>) -> Result<()> {
    let assistant = Assistant::new(&config.assist);
    let draft = assistant.draft_answer(question, context).await;
    println!("{draft}");
    Ok(())
}
