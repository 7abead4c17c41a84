// Exercises the ',' (input) instruction by providing bytes on stdin
// to a program that echoes them.
use std::io::Write;

fn program_file(content: &str) -> tempfile::NamedTempFile {
    let mut tf = tempfile::NamedTempFile::new().expect("tempfile");
    write!(tf, "{}", content).unwrap();
    tf
}

#[test]
fn reads_from_stdin_and_echoes_byte() {
    let tf = program_file(",.");
    let mut cmd = assert_cmd::Command::cargo_bin("bf")
        .expect("failed to locate bf binary");

    cmd.arg(tf.path())
        .write_stdin("A")
        .assert()
        .success()
        .stdout("A");
}

#[test]
fn reads_from_stdin_and_echoes_latin1_character() {
    let tf = program_file(",.");
    let mut cmd = assert_cmd::Command::cargo_bin("bf")
        .expect("failed to locate bf binary");

    cmd.arg(tf.path())
        .write_stdin("é")
        .assert()
        .success()
        .stdout("é");
}

#[test]
fn stores_the_code_point_of_the_input_character() {
    // 'é' is U+00E9; one increment makes it 'ê' (U+00EA)
    let tf = program_file(",+.");
    let mut cmd = assert_cmd::Command::cargo_bin("bf")
        .expect("failed to locate bf binary");

    cmd.arg(tf.path())
        .write_stdin("é")
        .assert()
        .success()
        .stdout("ê");
}

#[test]
fn input_character_above_one_byte_is_an_error() {
    let tf = program_file(",.");
    let mut cmd = assert_cmd::Command::cargo_bin("bf")
        .expect("failed to locate bf binary");

    cmd.arg(tf.path())
        .write_stdin("€")
        .assert()
        .code(1)
        .stdout("")
        .stderr(predicates::str::contains("U+20AC"));
}

#[test]
fn reads_only_as_many_characters_as_inputs() {
    // Three reads, output in reverse order
    let tf = program_file(",>,>,.<.<.");
    let mut cmd = assert_cmd::Command::cargo_bin("bf")
        .expect("failed to locate bf binary");

    cmd.arg(tf.path())
        .write_stdin("abcdef")
        .assert()
        .success()
        .stdout("cba");
}
