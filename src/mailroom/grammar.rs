//! Input validators for the three menu grammars.
//!
//! Each validator classifies one raw input line against its menu's grammar
//! and returns the matched tag, with any captured value (donor name, amount)
//! carried inside the tag. A `None` return means no rule matched and the
//! caller should re-prompt. Validators are pure: normalization happens here,
//! centrally, so actions never see un-normalized names.

use once_cell::sync::Lazy;
use regex::Regex;

/// Commands available at the main menu.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MainTag {
    Send,
    Report,
    Exit,
}

/// Commands available at the send menu.
#[derive(Debug, Clone, PartialEq)]
pub enum SendTag {
    /// A donor name, normalized to title case.
    Donor(String),
    List,
    Exit,
}

/// Commands available at the amount prompt.
#[derive(Debug, Clone, PartialEq)]
pub enum AmountTag {
    Amount(f64),
    Exit,
}

// Prefix-extendable spellings, anchored at the start of the line only:
// "send", "s", and "sxyz" all select Send, matching the historical menu.
static MAIN_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"(?i)^(?:(?P<send>s(?:end)?)|(?P<report>r(?:eport)?)|(?P<exit>x|exit))").unwrap()
});

static EXIT_RE: Lazy<Regex> = Lazy::new(|| Regex::new(r"(?i)^(?:x|exit)$").unwrap());
static LIST_RE: Lazy<Regex> = Lazy::new(|| Regex::new(r"(?i)^l(?:ist)?$").unwrap());

// A donor name is exactly two alphabetic tokens. Fully anchored so digits
// and punctuation anywhere in the line invalidate it.
static NAME_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(?i)^(?P<first>[a-z]+)\s+(?P<last>[a-z]+)$").unwrap());

// Leading digit must be 1-9, fraction is at most two digits. Fully anchored:
// "33.333333" must not half-match as "33.33".
static AMOUNT_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^(?P<amount>[1-9][0-9]*(?:\.[0-9]{0,2})?)$").unwrap());

pub fn match_main_menu(input: &str) -> Option<MainTag> {
    let caps = MAIN_RE.captures(input.trim())?;
    if caps.name("send").is_some() {
        Some(MainTag::Send)
    } else if caps.name("report").is_some() {
        Some(MainTag::Report)
    } else {
        Some(MainTag::Exit)
    }
}

pub fn match_send_menu(input: &str) -> Option<SendTag> {
    let line = input.trim();
    if EXIT_RE.is_match(line) {
        return Some(SendTag::Exit);
    }
    if LIST_RE.is_match(line) {
        return Some(SendTag::List);
    }
    let caps = NAME_RE.captures(line)?;
    let name = format!("{} {}", title_case(&caps["first"]), title_case(&caps["last"]));
    Some(SendTag::Donor(name))
}

pub fn match_amount(input: &str) -> Option<AmountTag> {
    let line = input.trim();
    if EXIT_RE.is_match(line) {
        return Some(AmountTag::Exit);
    }
    let caps = AMOUNT_RE.captures(line)?;
    let value: f64 = caps["amount"].parse().ok()?;
    Some(AmountTag::Amount(value))
}

fn title_case(token: &str) -> String {
    let mut chars = token.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars.flat_map(char::to_lowercase)).collect(),
        None => String::new(),
    }
}
