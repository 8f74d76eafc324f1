// src/teams.rs

use crate::error::{Error, Result};

/// Three-letter schedule code → nickname used in titles. Sorted by code.
const TEAMS: [(&str, &str); 30] = [
    ("atl", "Hawks"),
    ("bkn", "Nets"),
    ("bos", "Celtics"),
    ("cha", "Hornets"),
    ("chi", "Bulls"),
    ("cle", "Cavaliers"),
    ("dal", "Mavericks"),
    ("den", "Nuggets"),
    ("det", "Pistons"),
    ("gsw", "Warriors"),
    ("hou", "Rockets"),
    ("ind", "Pacers"),
    ("lac", "Clippers"),
    ("lal", "Lakers"),
    ("mem", "Grizzlies"),
    ("mia", "Heat"),
    ("mil", "Bucks"),
    ("min", "Timberwolves"),
    ("nop", "Pelicans"),
    ("nyk", "Knicks"),
    ("okc", "Thunder"),
    ("orl", "Magic"),
    ("phi", "76ers"),
    ("phx", "Suns"),
    ("por", "Trail Blazers"),
    ("sac", "Kings"),
    ("sas", "Spurs"),
    ("tor", "Raptors"),
    ("uta", "Jazz"),
    ("wsh", "Wizards"),
];

/// Nickname for a team code, case-insensitive.
pub fn team_name(code: &str) -> Result<&'static str> {
    let code = code.to_ascii_lowercase();
    TEAMS
        .binary_search_by(|(c, _)| (*c).cmp(code.as_str()))
        .map(|i| TEAMS[i].1)
        .map_err(|_| Error::Config(format!("unknown team code {code:?}")))
}

/// All (code, nickname) pairs, sorted by code.
pub fn list_teams() -> impl Iterator<Item = (&'static str, &'static str)> {
    TEAMS.iter().copied()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn lookup() {
        assert_eq!(team_name("gsw").unwrap(), "Warriors");
        assert_eq!(team_name("LAL").unwrap(), "Lakers");
        assert!(team_name("xyz").is_err());
    }

    #[test]
    fn table_is_sorted_for_binary_search() {
        let codes: Vec<&str> = list_teams().map(|(c, _)| c).collect();
        let mut sorted = codes.clone();
        sorted.sort_unstable();
        assert_eq!(codes, sorted);
        assert_eq!(codes.len(), 30);
    }
}
