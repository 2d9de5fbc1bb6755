use crate::domain::model::BookCard;
use crate::domain::ports::Renderer;
use crate::utils::error::Result;
use std::io::Write;

/// Writes recommendation cards to stdout, one block per book.
#[derive(Debug, Clone, Default)]
pub struct ConsoleRenderer;

impl ConsoleRenderer {
    pub fn new() -> Self {
        Self
    }

    fn write_cards<W: Write>(out: &mut W, cards: &[BookCard]) -> Result<()> {
        for (index, card) in cards.iter().enumerate() {
            writeln!(out, "{}. {}", index + 1, card.title)?;
            writeln!(out, "   Author: {}", card.authors)?;
            writeln!(out, "   Link:   {}", card.link)?;
            writeln!(out, "   Cover:  {}", card.thumbnail)?;
        }
        Ok(())
    }
}

impl Renderer for ConsoleRenderer {
    fn render(&self, cards: &[BookCard]) -> Result<()> {
        let stdout = std::io::stdout();
        let mut out = stdout.lock();
        Self::write_cards(&mut out, cards)
    }

    fn render_empty(&self) -> Result<()> {
        let stdout = std::io::stdout();
        let mut out = stdout.lock();
        writeln!(out, "No recommendations available right now. Try again later.")?;
        Ok(())
    }
}
