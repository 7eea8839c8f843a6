use assert_cmd::Command;
use predicates::{prelude::PredicateBooleanExt, str::contains};
use tempfile::TempDir;

const BIN_NAME: &str = "envelope";

fn envelope(dir: &TempDir) -> Command {
    let mut cmd = Command::cargo_bin(BIN_NAME).expect("binary exists");
    cmd.env("ENVELOPE_LEDGER_DATA_DIR", dir.path());
    cmd.env_remove("ENVELOPE_LOG");
    cmd
}

fn initialized() -> TempDir {
    let dir = TempDir::new().expect("temp dir");
    envelope(&dir).arg("init").assert().success();
    dir
}

fn add(dir: &TempDir, category: &str, amount: &str, date: &str, description: &str) {
    envelope(dir)
        .args(["transaction", "add", category, amount, "--date", date])
        .args(["--description", description])
        .assert()
        .success();
}

#[test]
fn init_creates_settings_and_default_envelopes() {
    let dir = TempDir::new().unwrap();
    envelope(&dir)
        .arg("init")
        .assert()
        .success()
        .stdout(contains("Loyer").and(contains("Courses alimentaires")));

    assert!(dir.path().join("config.json").exists());
    assert!(dir.path().join("data").join("ledger.json").exists());
}

#[test]
fn unknown_category_is_rejected() {
    let dir = initialized();
    envelope(&dir)
        .args(["transaction", "add", "Vacances", "30", "--date", "2025-01-05"])
        .assert()
        .failure()
        .stderr(contains("Unknown category"));

    envelope(&dir)
        .args(["transaction", "list"])
        .assert()
        .success()
        .stdout(contains("No transactions found."));
}

#[test]
fn summary_reports_balances_and_savings() {
    let dir = initialized();
    envelope(&dir)
        .args(["income", "set", "2000", "1500", "0", "0"])
        .assert()
        .success();
    add(&dir, "Loyer", "1100", "2025-01-01", "janvier");
    add(&dir, "Transport", "200", "2025-01-02", "pass navigo");

    envelope(&dir)
        .args(["summary", "--month", "2025-01"])
        .assert()
        .success()
        .stdout(
            contains("🔴 -50.00 €")
                .and(contains("3500.00 €"))
                .and(contains("1300.00 €"))
                .and(contains("2200.00 €"))
                .and(contains("Over budget: Transport by 50.00 €")),
        );

    envelope(&dir)
        .arg("history")
        .assert()
        .success()
        .stdout(contains("2025-01"));
}

#[test]
fn export_then_import_replaces_the_ledger() {
    let source = initialized();
    add(&source, "Santé", "25,50", "2025-03-10", "pharmacie");
    envelope(&source)
        .args(["debt", "add", "Crédit auto", "5000", "300", "--month", "2025-03"])
        .assert()
        .success();

    let export = source.path().join("export.json");
    envelope(&source)
        .arg("export")
        .arg(&export)
        .assert()
        .success();

    let contents = std::fs::read_to_string(&export).unwrap();
    assert!(contents.contains("\"Catégorie\": \"Santé\""));
    assert!(contents.contains("\"Payé ce mois\""));

    let target = initialized();
    add(&target, "Loyer", "1100", "2025-03-01", "should disappear");
    envelope(&target)
        .arg("import")
        .arg(&export)
        .assert()
        .success()
        .stdout(contains("Transactions: 1"));

    envelope(&target)
        .args(["transaction", "list"])
        .assert()
        .success()
        .stdout(contains("pharmacie").and(contains("should disappear").not()));

    envelope(&target)
        .args(["debt", "list"])
        .assert()
        .success()
        .stdout(contains("Crédit auto").and(contains("4700.00 €")));
}

#[test]
fn malformed_import_fails_and_keeps_state() {
    let dir = initialized();
    add(&dir, "Loyer", "1100", "2025-01-01", "janvier");

    let bad = dir.path().join("bad.json");
    std::fs::write(&bad, "{\"username\": \"x\", \"revenus\": [1, 2]").unwrap();

    envelope(&dir)
        .arg("import")
        .arg(&bad)
        .assert()
        .failure()
        .stderr(contains("Decode error"));

    envelope(&dir)
        .args(["transaction", "list"])
        .assert()
        .success()
        .stdout(contains("janvier"));
}

#[test]
fn import_without_debts_yields_empty_debts() {
    let dir = initialized();
    let file = dir.path().join("legacy.json");
    std::fs::write(
        &file,
        r#"{"username": "Camille", "revenus": [2000, 0, 0, 0], "transactions": []}"#,
    )
    .unwrap();

    envelope(&dir).arg("import").arg(&file).assert().success();
    envelope(&dir)
        .args(["debt", "list"])
        .assert()
        .success()
        .stdout(contains("No debts recorded."));
}

#[test]
fn recap_escapes_free_text() {
    let dir = initialized();
    envelope(&dir)
        .args(["user", "<b>Tom & Jerry</b>"])
        .assert()
        .success();
    add(&dir, "Loisirs", "12", "2025-01-04", "<script>alert('x')</script>");

    let recap = dir.path().join("recap.html");
    envelope(&dir).arg("recap").arg(&recap).assert().success();

    let html = std::fs::read_to_string(&recap).unwrap();
    assert!(html.contains("&lt;b&gt;Tom &amp; Jerry&lt;/b&gt;"));
    assert!(html.contains("&lt;script&gt;alert(&#39;x&#39;)&lt;/script&gt;"));
    assert!(!html.contains("<script>"));
}

#[test]
fn csv_export_has_header() {
    let dir = initialized();
    add(&dir, "Courses alimentaires", "54.20", "2025-02-03", "marché, samedi");

    let csv = dir.path().join("transactions.csv");
    envelope(&dir)
        .args(["export", "--format", "csv"])
        .arg(&csv)
        .assert()
        .success();

    let contents = std::fs::read_to_string(&csv).unwrap();
    let mut lines = contents.lines();
    assert_eq!(lines.next(), Some("Date,Catégorie,Montant,Description"));
    assert_eq!(
        lines.next(),
        Some("2025-02-03,Courses alimentaires,54.20,\"marché, samedi\"")
    );
}

#[test]
fn month_files_save_and_open() {
    let dir = initialized();
    add(&dir, "Loyer", "1100", "2025-01-01", "janvier");
    add(&dir, "Loyer", "1100", "2025-02-01", "février");

    envelope(&dir)
        .args(["month", "save", "2025-01"])
        .assert()
        .success()
        .stdout(contains("Saved 1 transaction(s) for 2025-01"));

    envelope(&dir)
        .args(["month", "list"])
        .assert()
        .success()
        .stdout(contains("2025-01"));

    envelope(&dir)
        .args(["month", "open", "2025-01"])
        .assert()
        .success();

    envelope(&dir)
        .args(["transaction", "list"])
        .assert()
        .success()
        .stdout(contains("janvier").and(contains("février").not()));

    envelope(&dir)
        .args(["month", "open", "2024-12"])
        .assert()
        .success()
        .stdout(contains("empty transaction log"));
}

#[test]
fn envelope_set_and_remove() {
    let dir = initialized();
    envelope(&dir)
        .args(["envelope", "set", "Vacances", "80"])
        .assert()
        .success()
        .stdout(contains("Created envelope 'Vacances'"));

    add(&dir, "Vacances", "30", "2025-07-14", "camping");

    envelope(&dir)
        .args(["envelope", "remove", "Nope"])
        .assert()
        .failure()
        .stderr(contains("not found"));

    envelope(&dir)
        .args(["envelope", "list"])
        .assert()
        .success()
        .stdout(contains("Vacances").and(contains("80.00 €")));
}

#[test]
fn bookkeeping_commands_do_not_record_history() {
    let dir = initialized();
    envelope(&dir).args(["user", "Camille"]).assert().success();
    envelope(&dir)
        .args(["debt", "add", "Prêt", "1000", "100"])
        .assert()
        .success();

    envelope(&dir)
        .arg("history")
        .assert()
        .success()
        .stdout(contains("No history recorded yet."));

    envelope(&dir)
        .args(["income", "set", "2000", "0", "0", "0"])
        .assert()
        .success();
    envelope(&dir)
        .arg("history")
        .assert()
        .success()
        .stdout(contains("No history recorded yet.").not());
}
