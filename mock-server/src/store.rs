//! In-memory guest list and RSVP records behind the mock endpoints.

use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::AvatarSelection;

/// A guest on the invite list. Guests sharing a `party` are family members.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct Guest {
    pub id: String,
    pub name: String,
    pub party: Option<String>,
}

impl Guest {
    pub fn new(name: &str, party: Option<&str>) -> Self {
        Self {
            id: Uuid::new_v4().to_string(),
            name: name.to_string(),
            party: party.map(str::to_string),
        }
    }
}

#[derive(Clone, Debug)]
pub struct StoredRsvp {
    pub name: String,
    pub email: String,
    pub is_attending: bool,
    pub attending_guests: Vec<String>,
    pub diet: Option<String>,
    pub avatars: Vec<AvatarSelection>,
}

#[derive(Debug, Default)]
pub struct Store {
    pub guests: Vec<Guest>,
    /// Oldest first; the last entry for an email is its current RSVP.
    pub rsvps: Vec<StoredRsvp>,
}

impl Store {
    pub fn new(guests: Vec<Guest>) -> Self {
        Self {
            guests,
            rsvps: Vec::new(),
        }
    }

    pub fn find_guest(&self, name: &str) -> Option<&Guest> {
        let wanted = normalize(name);
        self.guests.iter().find(|g| normalize(&g.name) == wanted)
    }

    /// Every guest in the same party, the guest included. Empty when the
    /// guest has no party.
    pub fn party_of(&self, guest: &Guest) -> Vec<&Guest> {
        match &guest.party {
            Some(party) => self
                .guests
                .iter()
                .filter(|g| g.party.as_deref() == Some(party.as_str()))
                .collect(),
            None => Vec::new(),
        }
    }

    pub fn latest_rsvp_mut(&mut self, email: &str) -> Option<&mut StoredRsvp> {
        let wanted = normalize(email);
        self.rsvps.iter_mut().rev().find(|r| normalize(&r.email) == wanted)
    }

    /// Avatar selections from attending RSVPs, first selection per full guest
    /// name, as `(first name, selection)`.
    pub fn attending_avatars(&self) -> Vec<(String, &AvatarSelection)> {
        let mut seen = std::collections::HashSet::new();
        self.rsvps
            .iter()
            .filter(|r| r.is_attending)
            .flat_map(|r| r.avatars.iter())
            .filter(|a| seen.insert(a.guest_name.clone()))
            .map(|a| (first_name(&a.guest_name).to_string(), a))
            .collect()
    }
}

fn normalize(s: &str) -> String {
    s.trim().to_lowercase()
}

/// Text before the first space.
pub fn first_name(full: &str) -> &str {
    full.split(' ').next().unwrap_or(full)
}

/// Basic shape check: one `@`, non-empty halves, a dot in the domain.
pub fn is_valid_email(email: &str) -> bool {
    let email = email.trim();
    if email.len() < 3 || email.len() > 254 {
        return false;
    }
    let mut parts = email.split('@');
    match (parts.next(), parts.next(), parts.next()) {
        (Some(local), Some(domain), None) => {
            !local.is_empty() && !domain.is_empty() && domain.contains('.')
        }
        _ => false,
    }
}
