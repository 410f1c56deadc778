//! The interactive menu loop.

use std::io::{self, Write};

use lineage_foundation::{Error, Result};

use crate::editor::{LineEditor, ReadResult, RustylineEditor};
use crate::session::Session;

/// What a text prompt produced.
enum Input {
    /// A trimmed line of text.
    Text(String),
    /// The user asked to return to the menu.
    Back,
    /// The user asked to leave the program.
    Exit,
}

/// What a numeric prompt produced.
enum NumberInput {
    /// A validated in-range number.
    Value(i64),
    /// The user asked to return to the menu.
    Back,
    /// The user asked to leave the program.
    Exit,
}

/// The interactive menu.
///
/// Generic over the line editor so tests can drive it with scripted input.
pub struct Repl<E: LineEditor = RustylineEditor> {
    /// The line editor for input.
    editor: E,

    /// Session state (tree, backing file).
    session: Session,

    /// Whether to show the welcome banner.
    show_banner: bool,
}

impl Repl<RustylineEditor> {
    /// Creates a new menu loop with the default rustyline editor.
    ///
    /// # Errors
    ///
    /// Returns an error if the editor fails to initialize.
    pub fn new(session: Session) -> Result<Self> {
        let editor = RustylineEditor::new()?;
        Ok(Self::with_editor(editor, session))
    }
}

impl<E: LineEditor> Repl<E> {
    /// Creates a new menu loop with the given editor.
    pub fn with_editor(editor: E, session: Session) -> Self {
        Self {
            editor,
            session,
            show_banner: true,
        }
    }

    /// Disables the welcome banner.
    #[must_use]
    pub const fn without_banner(mut self) -> Self {
        self.show_banner = false;
        self
    }

    /// Returns a reference to the session.
    #[must_use]
    pub const fn session(&self) -> &Session {
        &self.session
    }

    /// Returns a mutable reference to the session.
    pub fn session_mut(&mut self) -> &mut Session {
        &mut self.session
    }

    /// Runs the menu loop until the user quits.
    ///
    /// # Errors
    ///
    /// Returns an error if reading input fails fatally. Save failures are
    /// reported and the loop continues.
    pub fn run(&mut self) -> Result<()> {
        if self.show_banner {
            self.print_banner();
        }

        loop {
            self.print_menu();
            match self.menu_step() {
                Ok(true) => {}
                Ok(false) => break,
                Err(e) => self.print_error(&e),
            }
        }

        println!("\nGoodbye!");
        Ok(())
    }

    /// Executes one menu selection.
    ///
    /// Returns `Ok(true)` to continue, `Ok(false)` to exit.
    fn menu_step(&mut self) -> Result<bool> {
        let choice = match self.prompt("> ")? {
            Input::Text(text) => text,
            Input::Back => return Ok(true),
            Input::Exit => return Ok(false),
        };

        match choice.as_str() {
            "" => Ok(true),
            "1" => self.add_person(),
            "2" => {
                let rendered = self.session.tree().render(self.session.root());
                print!("{rendered}");
                let _ = io::stdout().flush();
                Ok(true)
            }
            "3" => match self.session.save() {
                Ok(()) => {
                    println!("Saved to '{}'.", self.session.path().display());
                    Ok(false)
                }
                Err(e) => {
                    self.print_error(&e);
                    Ok(true)
                }
            },
            "4" => Ok(false),
            "5" => {
                self.session.reset_to_default();
                println!("Default tree restored (not yet saved).");
                Ok(true)
            }
            other => {
                println!("Unknown option '{other}'. Pick 1-5.");
                Ok(true)
            }
        }
    }

    /// The add-person flow: pick a parent by generation, then describe the
    /// new person. `back` returns to the menu at any prompt, `exit` leaves
    /// the program.
    fn add_person(&mut self) -> Result<bool> {
        let layers = self.session.tree().generations(self.session.root());
        if layers.is_empty() {
            println!("The tree is empty; nothing to attach to.");
            return Ok(true);
        }

        self.print_generations(&layers);

        let generation = match self.prompt_number(
            &format!("Parent's generation (1-{}): ", layers.len()),
            1,
            to_i64(layers.len()),
        )? {
            NumberInput::Value(n) => as_index(n),
            NumberInput::Back => return Ok(true),
            NumberInput::Exit => return Ok(false),
        };
        let layer = &layers[generation - 1];

        let position = match self.prompt_number(
            &format!("Parent within generation {generation} (1-{}): ", layer.len()),
            1,
            to_i64(layer.len()),
        )? {
            NumberInput::Value(n) => as_index(n),
            NumberInput::Back => return Ok(true),
            NumberInput::Exit => return Ok(false),
        };
        let parent = layer[position - 1];

        let name = match self.prompt("Name: ")? {
            Input::Text(text) if !text.is_empty() => text,
            Input::Text(_) => {
                println!("A name is required.");
                return Ok(true);
            }
            Input::Back => return Ok(true),
            Input::Exit => return Ok(false),
        };

        let birth = match self.prompt_number(
            "Birth year: ",
            i64::from(i32::MIN),
            i64::from(i32::MAX),
        )? {
            NumberInput::Value(n) => as_year(n),
            NumberInput::Back => return Ok(true),
            NumberInput::Exit => return Ok(false),
        };

        let death = match self.prompt_number(
            "Death year (-1 if alive): ",
            i64::from(i32::MIN),
            i64::from(i32::MAX),
        )? {
            NumberInput::Value(n) => as_year(n),
            NumberInput::Back => return Ok(true),
            NumberInput::Exit => return Ok(false),
        };

        let death_year = if death == -1 { None } else { Some(death) };
        let child = self.session.tree_mut().add_person(name, birth, death_year);
        self.session.tree_mut().connect(parent, child);

        let added = self.session.tree().get(child)?;
        println!("Added {added} as a child of record #{parent}.");
        print!("{}", self.session.tree().render(self.session.root()));
        let _ = io::stdout().flush();
        Ok(true)
    }

    /// Lists every generation layer with 1-based member numbering.
    fn print_generations(&self, layers: &[Vec<usize>]) {
        for (depth, layer) in layers.iter().enumerate() {
            println!("Generation {}:", depth + 1);
            for (position, &index) in layer.iter().enumerate() {
                match self.session.tree().get(index) {
                    Ok(person) => println!("  {}) {person}", position + 1),
                    Err(_) => println!("  {}) [missing record #{index}]", position + 1),
                }
            }
        }
    }

    /// Reads one line, folding navigation keywords and terminal signals.
    ///
    /// Ctrl+C maps to `back`, Ctrl+D maps to `exit`.
    fn prompt(&mut self, text: &str) -> Result<Input> {
        match self.editor.read_line(text)? {
            ReadResult::Line(line) => {
                let trimmed = line.trim();
                if !trimmed.is_empty() {
                    self.editor.add_history(trimmed);
                }
                if trimmed.eq_ignore_ascii_case("back") {
                    Ok(Input::Back)
                } else if trimmed.eq_ignore_ascii_case("exit") {
                    Ok(Input::Exit)
                } else {
                    Ok(Input::Text(trimmed.to_string()))
                }
            }
            ReadResult::Interrupted => {
                println!();
                Ok(Input::Back)
            }
            ReadResult::Eof => Ok(Input::Exit),
        }
    }

    /// Reads a number in `[min, max]`, re-prompting on anything unreadable.
    fn prompt_number(&mut self, text: &str, min: i64, max: i64) -> Result<NumberInput> {
        loop {
            match self.prompt(text)? {
                Input::Text(raw) => match parse_menu_number(&raw) {
                    Some(n) if (min..=max).contains(&n) => return Ok(NumberInput::Value(n)),
                    Some(n) => println!("{n} is out of range ({min}-{max})."),
                    None => println!("'{raw}' is not a number."),
                },
                Input::Back => return Ok(NumberInput::Back),
                Input::Exit => return Ok(NumberInput::Exit),
            }
        }
    }

    /// Prints an error to stderr.
    #[allow(clippy::unused_self)]
    fn print_error(&self, error: &Error) {
        eprintln!("\x1b[31mError: {error}\x1b[0m");
    }

    /// Prints the menu.
    #[allow(clippy::unused_self)]
    fn print_menu(&self) {
        println!();
        println!("1) Add a person");
        println!("2) Print the tree");
        println!("3) Save and quit");
        println!("4) Quit without saving");
        println!("5) Restore the default tree");
    }

    /// Prints the welcome banner.
    fn print_banner(&self) {
        println!(
            "\x1b[1;36mLineage\x1b[0m v{} - {}",
            env!("CARGO_PKG_VERSION"),
            self.session.path().display()
        );
        println!("Type 'back' to return to the menu, 'exit' to leave.");
        let _ = io::stdout().flush();
    }
}

fn to_i64(n: usize) -> i64 {
    i64::try_from(n).unwrap_or(i64::MAX)
}

/// Accepts only plain digit strings or the literal `-1` (the alive
/// sentinel). Signed or decorated numbers like `-2000` or `+5` re-prompt.
fn parse_menu_number(raw: &str) -> Option<i64> {
    if raw != "-1" && (raw.is_empty() || !raw.bytes().all(|b| b.is_ascii_digit())) {
        return None;
    }
    raw.parse().ok()
}

/// Converts a validated 1-based selection back to `usize`.
#[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
fn as_index(n: i64) -> usize {
    n as usize
}

/// Narrows a validated year to `i32`.
#[allow(clippy::cast_possible_truncation)]
fn as_year(n: i64) -> i32 {
    n as i32
}
