use std::time::{SystemTime, UNIX_EPOCH};

pub const INSULTS: &[&str] = &[
    "Wrong!  You cheating scum!",
    "Say \"hi\" to the \\ backslash",
    "No soap, honkie-lips.",
];

pub fn get_insult() -> Option<&'static str> {
    if INSULTS.is_empty() {
        return None;
    }
    let millis = SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.as_millis())
        .unwrap_or(0);
    Some(INSULTS[(millis % INSULTS.len() as u128) as usize])
}
