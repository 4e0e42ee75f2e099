use super::*;

fn sample() -> Family {
    serde_json::from_value(serde_json::json!({
        "Id": 1,
        "Name": "Familie Janssens",
        "Address": "Kerkstraat 1",
        "Members": [{ "Id": 4, "Name": "Jan Janssens", "DateOfBirth": "1980-05-15T00:00:00", "FamilyId": 1 }],
        "Certificates": [{
            "Id": 7,
            "Title": "Voedselattest",
            "IssueDate": "2025-01-01",
            "ExpiryDate": "2026-01-01",
            "FamilyId": 1
        }]
    }))
    .unwrap()
}

#[test]
fn menu_lists_sections() {
    let text = menu();
    assert!(text.contains("Gezinnen"));
    assert!(text.contains("/familys"));
    assert!(text.contains("Vrijwilligers"));
}

#[test]
fn empty_family_list_has_message() {
    assert_eq!(families(&[]), "Geen families gevonden.\n");
}

#[test]
fn family_rows_show_counts_and_titles() {
    let mut bare = sample();
    bare.id = 2;
    bare.certificates.clear();
    let text = families(&[FamilyRow::from(&sample()), FamilyRow::from(&bare)]);

    assert!(text.contains("  Aantal leden: 1\n"));
    assert!(text.contains("  Attesten: Voedselattest\n"));
    assert!(text.contains("  Attesten: Geen\n"));
    assert!(text.contains("  Details: /familys/details/2\n"));
}

#[test]
fn family_detail_lists_members_and_certificates() {
    let text = family(&sample());
    assert!(text.contains("  - Jan Janssens (Geboren: 15/5/1980)  /familys/details/1/members/4\n"));
    assert!(text.contains(
        "  - Voedselattest (Uitgegeven: 1/1/2025, Vervalt: 1/1/2026)  /familys/details/1/certificates/7\n"
    ));
}

#[test]
fn family_detail_without_children() {
    let mut bare = sample();
    bare.members.clear();
    bare.certificates.clear();
    let text = family(&bare);
    assert!(text.contains("Aantal Leden: 0\n"));
    assert!(text.contains("  Geen leden\n"));
    assert!(text.contains("  Geen attesten\n"));
}

#[test]
fn member_and_certificate_details() {
    let source = sample();
    assert_eq!(
        member(&source.members[0]),
        "Lid Details\nID: 4\nNaam: Jan Janssens\nGeboortedatum: 15/5/1980\nFamilie ID: 1\n"
    );
    assert!(certificate(&source.certificates[0]).contains("Vervaldatum: 1/1/2026\n"));
}
