use zeroize::Zeroizing;

use super::App;
use crate::cli::MAX_COUNT;
use crate::notify::Kind;
use crate::pass::{CharClass, MAX_LENGTH, Password};
use crate::settings::{SLIDER_MAX, SLIDER_MIN};
use crate::terminal::{
    BOLD, DIM, GREEN, RED, RESET, box_bottom, box_line, box_line_center, box_opt, box_top,
    checkbox, clear, flush, print_rule, slider,
};

/// Redraw the whole screen.
pub fn draw(app: &App) {
    clear();

    if app.show_help {
        print_keys();
        return;
    }

    let settings = &app.settings;

    box_top("Password");
    box_line("");
    match app.password.as_ref() {
        Some(pass) => box_line_center(&emphasised(pass)),
        None => box_line_center(&format!("{DIM}(nothing generated yet){RESET}")),
    }
    box_line("");
    print_rule();

    box_line(&format!(
        "Length {:>3}  {}",
        settings.pass_length,
        slider(settings.pass_length, SLIDER_MIN, SLIDER_MAX, 40)
    ));
    box_line("");
    for (n, class) in CharClass::ALL.into_iter().enumerate() {
        box_line(&format!(
            "{} {} {}",
            n + 1,
            checkbox(settings.classes.contains(class)),
            class
        ));
    }
    box_line(&format!(
        "a {} Avoid similar characters",
        checkbox(settings.avoid_similar)
    ));
    box_line(&format!(
        "o {} Copy after generating",
        checkbox(settings.auto_copy)
    ));
    print_rule();
    box_line(&format!(
        "{DIM}Source: {}{RESET}",
        app.source().kind().description()
    ));
    box_line(&format!(
        "{DIM}[Enter] generate  [c] copy  [s] save  [?] keys  [q] quit{RESET}"
    ));
    box_bottom();

    if let Some(note) = app.notification() {
        let colour = match note.kind {
            Kind::Success => GREEN,
            Kind::Error => RED,
        };
        println!();
        println!("  {colour}{}{RESET}", note.message);
    }
    flush();
}

/// Bold copy of the password for display, wiped once drawn.
fn emphasised(pass: &Password) -> Zeroizing<String> {
    let mut shown = Zeroizing::new(String::with_capacity(
        BOLD.len() + pass.as_str().len() + RESET.len(),
    ));
    shown.push_str(BOLD);
    shown.push_str(pass.as_str());
    shown.push_str(RESET);
    shown
}

fn print_keys() {
    box_top("Keys");
    box_opt("  Enter, g, Space", "Generate a new password");
    box_opt("  c, y", "Copy the current password");
    box_opt("  Left / Right", "Length -1 / +1");
    box_opt("  Down / Up", "Length -5 / +5");
    box_opt("  1 2 3 4", "Toggle uppercase, lowercase, numbers, symbols");
    box_opt("  a", "Toggle avoiding similar characters");
    box_opt("  o", "Toggle copying after each generation");
    box_opt("  r", "Switch random source (OS / ChaCha20)");
    box_opt("  s", "Save settings as defaults");
    box_opt("  ?", "Show or hide this list");
    box_opt("  q, Esc, Ctrl+C", "Quit");
    box_bottom();
    flush();
}

pub fn print_help() {
    box_top("Classpass");
    box_line_center("Password generator with per-class coverage");
    box_line("");
    box_line("MODES:");
    box_line("  Run without arguments for the interactive screen.");
    box_line("  Pass flags to print (or copy) passwords and exit.");
    box_line("");
    box_line("USAGE:");
    box_line("  classpass [OPTIONS]");
    box_line("");
    box_line(" Password:");
    box_opt(
        "  -l, --length <N>",
        &format!("Characters per password (1-{MAX_LENGTH})"),
    );
    box_opt(
        "  -n, --number <N>",
        &format!("How many passwords (1-{MAX_COUNT}, default: 1)"),
    );
    box_opt("  -C, --classes <SET>", "Classes to use, letters from 'ulns'");
    box_opt("      --no-upper", "Leave out uppercase letters");
    box_opt("      --no-lower", "Leave out lowercase letters");
    box_opt("      --no-numbers", "Leave out digits");
    box_opt("      --no-symbols", "Leave out symbols");
    box_opt("  -a, --avoid-similar", "Skip look-alike glyphs such as 0/O and 1/l/I");
    box_opt(
        "      --symbols <CHARS>",
        "Override the symbol alphabet (letters/digits already enabled are skipped)",
    );
    box_opt("  -r, --rng <os|chacha>", "Random source (default: os)");
    box_line("");
    box_line(" Output:");
    box_opt("  -b, --board", "Copy to clipboard instead of printing");
    box_opt("  -q, --quiet", "Only print passwords and errors");
    box_line("");
    box_line(" Settings:");
    box_opt("  -s, --saved", "Start from saved settings (default)");
    box_opt("  -d, --default", "Start from built-in defaults");
    box_line("");
    box_line(" Info:");
    box_opt("  -h, --help", "Display this help message");
    box_opt("  -v, --version", "Display version");
    box_line("");
    box_line("ENVIRONMENT:");
    box_opt("  CLASSPASS_CONFIG", "Settings file path");
    box_opt("  CLASSPASS_LOG", "Log filter, e.g. debug");
    box_line("");
    box_line("EXAMPLES:");
    box_line("  classpass -l 12 --no-symbols   Letters and digits");
    box_line("  classpass -C u -a -l 8         Unambiguous capitals");
    box_line("  classpass -n 5 -b              Five passwords to clipboard");
    box_bottom();
    println!();
}

#[cfg(test)]
mod tests {
    use rand::SeedableRng;
    use rand_chacha::ChaCha20Rng;

    use super::*;
    use crate::pass::{GenerationConfig, generate};

    #[test]
    fn emphasised_wraps_password_in_bold() {
        let mut rng = ChaCha20Rng::seed_from_u64(5);
        let pass = generate(&GenerationConfig::default(), &mut rng).unwrap();
        let shown = emphasised(&pass);
        assert_eq!(shown.as_str(), format!("{BOLD}{}{RESET}", pass.as_str()));
    }
}
