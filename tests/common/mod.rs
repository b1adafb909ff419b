use assert_cmd::Command;

pub fn tickmark_cmd() -> Command {
    let mut cmd = Command::cargo_bin("tickmark").unwrap();
    cmd.env_remove("TICKMARK_ROOT");
    cmd
}
