use anyhow::Result;
use serde_json::Value;

use crate::{CliTest, streams};

const GREETING: &str = r#"import { FormattedMessage } from "react-intl";

export function Greeting({ name }) {
    return (
        <FormattedMessage
            id="greeting"
            description="Greets the signed-in user"
            defaultMessage="Hello,   {name}!"
        />
    );
}

export const bye = t("Goodbye");
"#;

#[test]
fn test_extract_writes_catalogs() -> Result<()> {
    let test = CliTest::with_file("src/Greeting.tsx", GREETING)?;

    let output = test
        .extract_command()
        .args(["--messages-dir", "build/messages"])
        .output()?;
    let (stdout, stderr) = streams(&output);

    assert_eq!(output.status.code(), Some(0), "stderr: {}", stderr);
    assert!(stdout.contains("✓ Extracted 2 messages from 1 file, wrote 1 catalog"));

    let catalog: Value = serde_json::from_str(&test.read_file("build/messages/src/Greeting.json")?)?;
    assert_eq!(
        catalog,
        serde_json::json!([
            {
                "id": "greeting",
                "description": "Greets the signed-in user",
                "defaultMessage": "Hello,   {name}!"
            },
            { "id": "Goodbye", "defaultMessage": "Goodbye" }
        ])
    );

    Ok(())
}

#[test]
fn test_extract_without_messages_dir_writes_nothing() -> Result<()> {
    let test = CliTest::with_file("src/Greeting.tsx", GREETING)?;

    let output = test.extract_command().output()?;
    let (stdout, _) = streams(&output);

    assert!(output.status.success());
    assert!(stdout.contains("✓ Extracted 2 messages from 1 file\n"));
    assert!(!test.root().join("build").exists());

    Ok(())
}

#[test]
fn test_extract_json_output() -> Result<()> {
    let test = CliTest::with_file("src/Greeting.tsx", GREETING)?;
    test.write_file("src/util.ts", "export const answer = 42;\n")?;

    let output = test
        .extract_command()
        .args(["--json", "--extract-source-location"])
        .output()?;
    let (stdout, stderr) = streams(&output);
    assert!(output.status.success(), "stderr: {}", stderr);

    let value: Value = serde_json::from_str(&stdout)?;
    let files: Vec<&String> = value.as_object().unwrap().keys().collect();
    assert_eq!(files, vec!["src/Greeting.tsx", "src/util.ts"]);

    let messages = &value["src/Greeting.tsx"]["react-intl"]["messages"];
    assert_eq!(messages[0]["id"], "greeting");
    assert_eq!(messages[0]["sourceLocation"]["file"], "src/Greeting.tsx");
    assert_eq!(messages[0]["sourceLocation"]["line"], 5);
    assert_eq!(messages[1]["sourceLocation"]["line"], 13);
    assert_eq!(value["src/util.ts"]["react-intl"]["messages"], serde_json::json!([]));

    Ok(())
}

#[test]
fn test_dynamic_message_fails_the_run() -> Result<()> {
    let test = CliTest::with_file(
        "src/app.tsx",
        r#"import { FormattedMessage } from "react-intl";
export const App = ({ msg }) => <FormattedMessage id="app" defaultMessage={msg} />;
"#,
    )?;
    test.write_file("src/ok.tsx", GREETING)?;

    let output = test
        .extract_command()
        .args(["--messages-dir", "out"])
        .output()?;
    let (stdout, _) = streams(&output);

    assert_eq!(output.status.code(), Some(1));
    assert!(stdout.contains("error: Messages must be statically evaluate-able"));
    assert!(stdout.contains("static-evaluation"));
    assert!(stdout.contains("--> src/app.tsx:2:"));
    assert!(stdout.contains("✘ 1 problems (1 error, 0 warnings)"));
    assert!(!stdout.contains("Extracted"));

    // The failing unit writes nothing; the other one is unaffected.
    assert!(!test.root().join("out/src/app.json").exists());
    assert!(test.root().join("out/src/ok.json").exists());

    Ok(())
}

#[test]
fn test_invalid_message_syntax() -> Result<()> {
    let test = CliTest::with_file(
        "src/app.tsx",
        r#"export const a = t("You have {count, plural, one {# item} other {# items}");
"#,
    )?;

    let output = test.extract_command().output()?;
    let (stdout, _) = streams(&output);

    assert_eq!(output.status.code(), Some(1));
    assert!(stdout.contains("error: Message failed to parse."));
    assert!(stdout.contains("message-syntax"));
    assert!(stdout.contains("= note: Expected"));

    Ok(())
}

#[test]
fn test_enforce_descriptions() -> Result<()> {
    let test = CliTest::with_file("src/bye.ts", "export const bye = t(\"Goodbye\");\n")?;

    let relaxed = test.extract_command().output()?;
    assert!(relaxed.status.success());

    let strict = test
        .extract_command()
        .arg("--enforce-descriptions")
        .output()?;
    let (stdout, _) = streams(&strict);
    assert_eq!(strict.status.code(), Some(1));
    assert!(stdout.contains("Message must have a `description`."));
    assert!(stdout.contains("missing-description"));

    Ok(())
}

#[test]
fn test_duplicate_ids_conflict_within_a_unit_only() -> Result<()> {
    let test = CliTest::with_file(
        "src/a.tsx",
        r#"import { defineMessages } from "react-intl";
export const messages = defineMessages({
    title: { id: "title", defaultMessage: "Title" },
    heading: { id: "title", defaultMessage: "Heading" },
});
"#,
    )?;
    test.write_file(
        "src/b.tsx",
        r#"import { defineMessage } from "react-intl";
export const title = defineMessage({ id: "title", defaultMessage: "Another title" });
"#,
    )?;

    let output = test.extract_command().arg("--json").output()?;
    let (stdout, stderr) = streams(&output);

    assert_eq!(output.status.code(), Some(1));
    assert!(stderr.contains("Duplicate message id: \"title\""));
    assert!(stderr.contains("--> src/a.tsx:4:"));

    let value: Value = serde_json::from_str(&stdout)?;
    assert!(value.get("src/a.tsx").is_none());
    assert_eq!(
        value["src/b.tsx"]["react-intl"]["messages"][0]["defaultMessage"],
        "Another title"
    );

    Ok(())
}

#[test]
fn test_unsupported_component_warns() -> Result<()> {
    let test = CliTest::with_file(
        "src/list.tsx",
        r#"import { FormattedPlural } from "react-intl";
export const List = ({ n }) => <FormattedPlural value={n} one="item" other="items" />;
"#,
    )?;

    let output = test.extract_command().output()?;
    let (stdout, _) = streams(&output);

    assert!(output.status.success());
    assert!(stdout.contains(
        "warning: Default messages are not extracted from <FormattedPlural>, use <FormattedMessage> instead."
    ));
    assert!(stdout.contains("✘ 1 problems (0 errors, 1 warning)"));
    assert!(stdout.contains("✓ Extracted 0 messages from 1 file"));

    Ok(())
}

#[test]
fn test_parse_error() -> Result<()> {
    let test = CliTest::with_file("src/broken.tsx", "export const = ;\n")?;

    let output = test.extract_command().output()?;
    let (stdout, _) = streams(&output);

    assert_eq!(output.status.code(), Some(1));
    assert!(stdout.contains("parse-error"));
    assert!(stdout.contains("--> src/broken.tsx:1:"));

    Ok(())
}

#[test]
fn test_config_file() -> Result<()> {
    let test = CliTest::with_file(
        ".intlrc.json",
        r#"{
    "includes": ["app"],
    "moduleSourceName": "@acme/intl",
    "messagesDir": "./i18n"
}"#,
    )?;
    test.write_file(
        "app/page.tsx",
        r#"import { FormattedMessage as Message } from "@acme/intl";
export const Page = () => <Message id="page.title" defaultMessage="Welcome" />;
"#,
    )?;
    test.write_file("lib/skipped.tsx", GREETING)?;

    let output = test.extract_command().output()?;
    let (stdout, stderr) = streams(&output);

    assert!(output.status.success(), "stderr: {}", stderr);
    assert!(stdout.contains("✓ Extracted 1 message from 1 file, wrote 1 catalog"));
    assert!(test.read_file("i18n/app/page.json")?.contains("\"page.title\""));

    Ok(())
}

#[test]
fn test_invalid_config_is_an_internal_error() -> Result<()> {
    let test = CliTest::with_file(".intlrc.json", r#"{ "ignores": ["[invalid"] }"#)?;

    let output = test.extract_command().output()?;
    let (_, stderr) = streams(&output);

    assert_eq!(output.status.code(), Some(2));
    assert!(stderr.contains("Error:"));
    assert!(stderr.contains("ignores"));

    Ok(())
}

#[test]
fn test_help() -> Result<()> {
    let test = CliTest::new()?;

    let output = test.command().arg("--help").output()?;
    let (stdout, _) = streams(&output);

    assert!(output.status.success());
    assert!(stdout.contains("extract"));
    assert!(stdout.contains("init"));

    Ok(())
}
