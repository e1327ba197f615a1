use assert_cmd::Command;
use predicates::prelude::*;

/// Helper function to create a Command with --no-color flag for testing
fn brew_cmd() -> Command {
    let mut cmd = Command::cargo_bin("brew").expect("Failed to find brew binary");
    cmd.arg("--no-color");
    cmd
}

/// Tomorrow's date in the form the booking form expects
fn tomorrow() -> String {
    jiff::Zoned::now()
        .date()
        .tomorrow()
        .expect("tomorrow is representable")
        .to_string()
}

#[test]
fn test_cli_lists_cafes_by_default() {
    brew_cmd()
        .assert()
        .success()
        .stdout(predicate::str::contains("Discover Cafes. Book Tables. Sip More."))
        .stdout(predicate::str::contains("Nordic Brew"))
        .stdout(predicate::str::contains("Artisan's Corner"));
}

#[test]
fn test_cli_cafes_subcommand() {
    brew_cmd()
        .arg("cafes")
        .assert()
        .success()
        .stdout(predicate::str::contains("## Warmth & Wonder (ID: 1)"))
        .stdout(predicate::str::contains("- **Location**: Downtown Arts District"));
}

#[test]
fn test_cli_book_success() {
    brew_cmd()
        .args([
            "book",
            "Nordic Brew",
            "--name",
            "Asha Rao",
            "--phone",
            "555-0100",
            "--email",
            "asha@example.com",
            "--date",
            &tomorrow(),
            "--time",
            "18:00",
            "--guests",
            "2",
        ])
        .assert()
        .success()
        .stdout(predicate::str::contains("Booking Confirmed!"))
        .stdout(predicate::str::contains("Your booking is confirmed!"))
        .stdout(predicate::str::contains("- Booking ID: BK-"))
        .stdout(predicate::str::contains("data:image/png;base64,"));
}

#[test]
fn test_cli_book_by_catalog_id() {
    brew_cmd()
        .args([
            "book",
            "3",
            "--name",
            "Asha Rao",
            "--phone",
            "555-0100",
            "--email",
            "asha@example.com",
            "--date",
            &tomorrow(),
            "--time",
            "12:30",
        ])
        .assert()
        .success()
        .stdout(predicate::str::contains("The Industrial"));
}

#[test]
fn test_cli_book_rejects_past_date() {
    brew_cmd()
        .args([
            "book",
            "Nordic Brew",
            "--name",
            "Asha Rao",
            "--phone",
            "555-0100",
            "--email",
            "asha@example.com",
            "--date",
            "2001-01-01",
            "--time",
            "18:00",
        ])
        .assert()
        .failure()
        .stderr(predicate::str::contains("date"));
}

#[test]
fn test_cli_book_rejects_off_grid_time() {
    brew_cmd()
        .args([
            "book",
            "Nordic Brew",
            "--name",
            "Asha Rao",
            "--phone",
            "555-0100",
            "--email",
            "asha@example.com",
            "--date",
            &tomorrow(),
            "--time",
            "18:15",
        ])
        .assert()
        .failure()
        .stderr(predicate::str::contains("half-hour"));
}

#[test]
fn test_cli_book_rejects_unknown_cafe() {
    brew_cmd()
        .args([
            "book",
            "Moonlight Beans",
            "--name",
            "Asha Rao",
            "--phone",
            "555-0100",
            "--email",
            "asha@example.com",
            "--date",
            &tomorrow(),
            "--time",
            "18:00",
        ])
        .assert()
        .failure()
        .stderr(predicate::str::contains("No cafe matches"));
}

#[test]
fn test_cli_book_saves_qr_image() {
    let dir = tempfile::tempdir().expect("temp dir");

    brew_cmd()
        .args([
            "book",
            "Nordic Brew",
            "--name",
            "Asha Rao",
            "--phone",
            "555-0100",
            "--email",
            "asha@example.com",
            "--date",
            &tomorrow(),
            "--time",
            "18:00",
            "--save-dir",
            dir.path().to_str().expect("utf-8 path"),
        ])
        .assert()
        .success()
        .stdout(predicate::str::contains("Saved QR image to"));

    let path = dir.path().join("brew-booking-Nordic Brew.png");
    let bytes = std::fs::read(&path).expect("QR image written");
    assert_eq!(&bytes[..8], b"\x89PNG\r\n\x1a\n");
}

#[test]
fn test_cli_redeem_success() {
    brew_cmd()
        .args(["redeem", "The Industrial"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Code Generated!"))
        .stdout(predicate::str::is_match(r"Show code \d{6} at The Industrial").expect("valid regex"))
        .stdout(predicate::str::contains("- Redemption ID: RD-"))
        .stdout(predicate::str::contains("- Expires:"));
}

#[test]
fn test_cli_bookings_empty_session() {
    brew_cmd()
        .arg("bookings")
        .assert()
        .success()
        .stdout(predicate::str::contains("No bookings yet."))
        .stdout(predicate::str::contains("Start exploring cafes"));
}

#[test]
fn test_cli_plans() {
    brew_cmd()
        .arg("plans")
        .assert()
        .success()
        .stdout(predicate::str::contains("Choose Your Cafe Journey"))
        .stdout(predicate::str::contains("Cafe Connoisseur"))
        .stdout(predicate::str::contains("Unlimited bookings"));
}

#[test]
fn test_cli_demo_accumulates_history() {
    brew_cmd()
        .arg("demo")
        .assert()
        .success()
        .stdout(predicate::str::contains("Booking Confirmed!"))
        .stdout(predicate::str::contains("Code Generated!"))
        .stdout(predicate::str::contains("# My Bookings"))
        .stdout(predicate::str::contains("## Upcoming Bookings"))
        .stdout(predicate::str::contains("- Booking ID: BK-"))
        .stdout(predicate::str::contains("- Redemption ID: RD-"));
}
