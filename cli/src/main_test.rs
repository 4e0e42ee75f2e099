use super::*;

#[test]
fn yes_answers_accept_dutch_and_english() {
    assert!(is_yes("j\n"));
    assert!(is_yes(" Ja "));
    assert!(is_yes("yes"));
    assert!(!is_yes(""));
    assert!(!is_yes("nee"));
}

#[test]
fn assume_yes_skips_prompt() {
    assert!(Prompt { assume_yes: true }.confirm("Weet je het zeker?"));
}

#[test]
fn settled_maps_phases_to_messages() {
    let ok: Phase<u8> = Phase::Success(1);
    assert_eq!(settled(&ok, "x").unwrap(), &1);

    let missing: Phase<u8> = Phase::NotFound;
    assert_eq!(settled(&missing, "Lid niet gevonden.").unwrap_err().to_string(), "Lid niet gevonden.");

    let failed: Phase<u8> = Phase::Error("Failed to fetch member: 500 Internal Server Error".to_owned());
    assert_eq!(
        settled(&failed, "x").unwrap_err().to_string(),
        "Failed to fetch member: 500 Internal Server Error"
    );
}

#[test]
fn cli_parses_nested_commands() {
    let cli = Cli::try_parse_from([
        "vincentius",
        "certificates",
        "add",
        "3",
        "--title",
        "Voedselattest",
        "--issue-date",
        "2025-01-01",
        "--expiry-date",
        "2026-01-01",
    ])
    .unwrap();
    assert!(matches!(
        cli.command,
        Command::Certificates(CertificatesCommand { command: CertificatesSubcommand::Add { .. } })
    ));
}
