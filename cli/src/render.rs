//! Plain-text rendering of the family screens for the terminal.
//!
//! Labels match the browser client so both front ends read the same.

#[cfg(test)]
#[path = "render_test.rs"]
mod render_test;

use vincentius::net::types::{Certificate, Family, Member};
use vincentius::state::families::FamilyRow;
use vincentius::util::routes;

pub fn menu() -> String {
    let mut out = String::from("Welkom bij de Sint-Vincentius App!\nWat wil je beheren?\n");
    for link in routes::MENU {
        out.push_str(&format!("  {:<14} {}\n", link.label, link.href));
    }
    out
}

pub fn families(rows: &[FamilyRow]) -> String {
    if rows.is_empty() {
        return "Geen families gevonden.\n".to_owned();
    }
    let mut out = String::new();
    for row in rows {
        let titles = if row.certificate_titles.is_empty() {
            "Geen".to_owned()
        } else {
            row.certificate_titles.join(", ")
        };
        out.push_str(&format!("Familienaam: {} (#{})\n", row.name, row.id));
        out.push_str(&format!("  Aantal leden: {}\n", row.member_count));
        out.push_str(&format!("  Adres: {}\n", row.address));
        out.push_str(&format!("  Attesten: {titles}\n"));
        out.push_str(&format!("  Details: {}\n", row.detail_route));
    }
    out
}

pub fn family(family: &Family) -> String {
    let mut out = String::from("Familie Details\n");
    out.push_str(&format!("ID: {}\n", family.id));
    out.push_str(&format!("Familienaam: {}\n", family.name));
    out.push_str(&format!("Adres: {}\n", family.address));
    out.push_str(&format!("Aantal Leden: {}\n", family.members.len()));

    out.push_str("Leden:\n");
    if family.members.is_empty() {
        out.push_str("  Geen leden\n");
    }
    for member in &family.members {
        let route = routes::member_detail(family.id, member.id);
        out.push_str(&format!("  - {} (Geboren: {})  {route}\n", member.name, member.date_of_birth));
    }

    out.push_str("Attesten:\n");
    if family.certificates.is_empty() {
        out.push_str("  Geen attesten\n");
    }
    for cert in &family.certificates {
        let route = routes::certificate_detail(family.id, cert.id);
        out.push_str(&format!(
            "  - {} (Uitgegeven: {}, Vervalt: {})  {route}\n",
            cert.title, cert.issue_date, cert.expiry_date
        ));
    }
    out
}

pub fn member(member: &Member) -> String {
    format!(
        "Lid Details\nID: {}\nNaam: {}\nGeboortedatum: {}\nFamilie ID: {}\n",
        member.id, member.name, member.date_of_birth, member.family_id
    )
}

pub fn certificate(cert: &Certificate) -> String {
    format!(
        "Attest Details\nID: {}\nTitel: {}\nUitgiftedatum: {}\nVervaldatum: {}\nFamilie ID: {}\n",
        cert.id, cert.title, cert.issue_date, cert.expiry_date, cert.family_id
    )
}
