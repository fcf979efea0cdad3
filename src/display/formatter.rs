//! Terminal output using termimad

use log::warn;
use termimad::MadSkin;

use crate::display::terminal::should_use_colors;

/// Print rendered text to the terminal with rich formatting (or plain fallback)
pub fn print_markdown(text: &str) {
    if should_use_colors() {
        if let Err(e) = print_rich(text) {
            warn!("Terminal rendering failed ({}), using plain output", e);
            print_plain(text);
        }
    } else {
        print_plain(text);
    }
}

/// Print through a termimad skin
fn print_rich(text: &str) -> Result<(), termimad::Error> {
    let mut skin = MadSkin::default();
    customize_skin(&mut skin);
    skin.write_text(text)?;
    Ok(())
}

/// Keep termimad's own styling close to the ANSI spans mdview emits
fn customize_skin(skin: &mut MadSkin) {
    use termimad::crossterm::style::{Attribute, Color::*};

    // Headings were already flattened to bold spans
    for header in skin.headers.iter_mut() {
        header.add_attr(Attribute::Bold);
    }

    skin.inline_code.set_fg(Yellow);
    skin.bold.add_attr(Attribute::Bold);
    skin.italic.add_attr(Attribute::Italic);
    skin.strikeout.add_attr(Attribute::CrossedOut);
    skin.bullet.set_fg(Cyan);
}

fn print_plain(text: &str) {
    println!("{}", text);
}
