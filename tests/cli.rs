use assert_cmd::Command;
use predicates::prelude::*;
use tempfile::TempDir;

const EMAIL: &str = "asha@example.com";
const PASSWORD: &str = "correct-horse";

fn budgetbuddy(data_dir: &TempDir) -> Command {
    let mut cmd = Command::cargo_bin("budgetbuddy").unwrap();
    cmd.env("BUDGETBUDDY_DATA_DIR", data_dir.path())
        .env("BUDGETBUDDY_PASSWORD", PASSWORD)
        .current_dir(data_dir.path());
    cmd
}

fn signed_up() -> TempDir {
    let dir = TempDir::new().unwrap();
    budgetbuddy(&dir)
        .args(["auth", "signup", EMAIL])
        .assert()
        .success()
        .stdout(predicate::str::contains("Signed in as asha@example.com"));
    dir
}

fn add(dir: &TempDir, args: &[&str]) {
    budgetbuddy(dir)
        .args(["expense", "add"])
        .args(args)
        .assert()
        .success();
}

#[test]
fn data_commands_require_sign_in() {
    let dir = TempDir::new().unwrap();
    budgetbuddy(&dir)
        .arg("summary")
        .assert()
        .failure()
        .stderr(predicate::str::contains("You are not signed in"));
}

#[test]
fn login_errors_use_fixed_messages() {
    let dir = signed_up();
    budgetbuddy(&dir).args(["auth", "logout"]).assert().success();

    budgetbuddy(&dir)
        .args(["auth", "login", EMAIL])
        .env("BUDGETBUDDY_PASSWORD", "wrong-password")
        .assert()
        .failure()
        .stderr(predicate::str::contains("Invalid email or password."));

    budgetbuddy(&dir)
        .args(["auth", "signup", EMAIL])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Email is already in use."));

    budgetbuddy(&dir)
        .args(["auth", "login", EMAIL])
        .assert()
        .success();
    budgetbuddy(&dir)
        .args(["auth", "whoami"])
        .assert()
        .success()
        .stdout(predicate::str::contains(EMAIL));
}

#[test]
fn add_list_and_summarize() {
    let dir = signed_up();
    add(&dir, &["Groceries", "45.20", "-c", "Food", "-d", "2024-03-01"]);
    add(&dir, &["Metro card", "20", "-c", "transport", "-d", "2024-03-02"]);

    budgetbuddy(&dir)
        .args(["expense", "list"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Groceries"))
        .stdout(predicate::str::contains("₹45.20"))
        .stdout(predicate::str::contains("Metro card"));

    budgetbuddy(&dir)
        .args(["expense", "list", "-c", "Transport"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Metro card"))
        .stdout(predicate::str::contains("Groceries").not())
        .stdout(predicate::str::contains("Showing 1 of 2 expenses"));

    budgetbuddy(&dir)
        .arg("summary")
        .assert()
        .success()
        .stdout(predicate::str::contains("₹65.20"))
        .stdout(predicate::str::contains("Food:"));
}

#[test]
fn invalid_expense_is_rejected() {
    let dir = signed_up();
    budgetbuddy(&dir)
        .args(["expense", "add", "Lunch", "0", "-c", "Food"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Invalid amount"));

    budgetbuddy(&dir)
        .arg("summary")
        .assert()
        .success()
        .stdout(predicate::str::contains("No expenses yet"));
}

#[test]
fn budget_goal_warns_when_exceeded() {
    let dir = signed_up();
    budgetbuddy(&dir)
        .args(["budget", "set", "100"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Monthly budget goal set to ₹100.00"));

    add(&dir, &["Concert", "150", "-c", "Entertainment"]);

    budgetbuddy(&dir)
        .arg("summary")
        .assert()
        .success()
        .stdout(predicate::str::contains(
            "Warning: You are ₹50.00 over your monthly budget goal of ₹100.00!",
        ));

    budgetbuddy(&dir).args(["budget", "clear"]).assert().success();
    budgetbuddy(&dir)
        .args(["budget", "show"])
        .assert()
        .success()
        .stdout(predicate::str::contains("No monthly budget goal set."));
}

#[test]
fn export_writes_files() {
    let dir = signed_up();
    budgetbuddy(&dir)
        .args(["export", "csv"])
        .assert()
        .success()
        .stdout(predicate::str::contains("No data to export."));

    add(&dir, &["Pens, paper", "3", "-c", "Education", "-d", "2024-03-05"]);

    budgetbuddy(&dir).args(["export", "csv"]).assert().success();
    let csv = std::fs::read_to_string(dir.path().join("budgetbuddy_expenses.csv")).unwrap();
    assert_eq!(
        csv,
        "Title,Category,Amount,Date\n\"Pens, paper\",Education,3.00,2024-03-05\n"
    );

    let out = dir.path().join("out");
    budgetbuddy(&dir)
        .args(["export", "json", "-o"])
        .arg(&out)
        .assert()
        .success();
    let json = std::fs::read_to_string(out.join("budgetbuddy_expenses.json")).unwrap();
    assert!(json.contains("\"title\": \"Pens, paper\""));
}

#[test]
fn delete_and_reset() {
    let dir = signed_up();
    add(&dir, &["Taxi", "12", "-c", "Transport", "-d", "2024-03-05"]);
    add(&dir, &["Pizza", "9", "-c", "Food", "-d", "2024-03-05"]);

    let log = std::fs::read_to_string(dir.path().join("audit.log")).unwrap();
    let taxi_line = log.lines().find(|l| l.contains("Taxi")).unwrap();
    let entry: serde_json::Value = serde_json::from_str(taxi_line).unwrap();
    let taxi_id = entry["after"]["id"].as_str().unwrap().to_string();

    budgetbuddy(&dir)
        .args(["expense", "delete", &taxi_id])
        .assert()
        .success()
        .stdout(predicate::str::contains("Deleted expense: Taxi"));

    budgetbuddy(&dir)
        .args(["expense", "delete", &taxi_id])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Expense not found"));

    budgetbuddy(&dir)
        .args(["reset", "--yes"])
        .assert()
        .success()
        .stdout(predicate::str::contains("All data has been reset."));

    budgetbuddy(&dir)
        .args(["expense", "list"])
        .assert()
        .success()
        .stdout(predicate::str::contains("No expenses found."));

    budgetbuddy(&dir)
        .arg("history")
        .assert()
        .success()
        .stdout(predicate::str::contains("DELETE UserData"));
}

#[test]
fn unwritable_audit_log_only_warns() {
    let dir = signed_up();
    std::fs::create_dir(dir.path().join("audit.log")).unwrap();

    budgetbuddy(&dir)
        .args(["expense", "add", "Tea", "2", "-c", "Food", "-d", "2024-03-05"])
        .assert()
        .success()
        .stderr(predicate::str::contains("not recorded in the audit log"));

    budgetbuddy(&dir)
        .args(["expense", "list"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Tea").count(1));
}

#[test]
fn oversized_amount_is_rejected() {
    let dir = signed_up();
    budgetbuddy(&dir)
        .args(["expense", "add", "Yacht", "50000000000000000", "-c", "Other"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("must not exceed 999999999999.99"));
}

#[test]
fn unrenderable_date_format_is_reported() {
    let dir = signed_up();
    std::fs::write(dir.path().join("config.json"), r#"{"date_format": "%H:%M"}"#).unwrap();

    budgetbuddy(&dir)
        .args(["expense", "list"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Invalid date_format '%H:%M'"));
}
