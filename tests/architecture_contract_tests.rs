//! Architecture contract tests.

mod support;

use support::architecture::{find_lines_containing, path_exists, read_relative};

#[test]
fn cli_has_no_direct_infrastructure_imports() {
    let hits = find_lines_containing(
        "src/adapter/inbound/cli",
        &["use crate::infrastructure", "crate::infrastructure::"],
    );

    assert!(
        hits.is_empty(),
        "found direct infrastructure imports in inbound CLI adapters: {hits:#?}"
    );
}

#[test]
fn domain_has_no_framework_or_outer_layer_imports() {
    let hits = find_lines_containing(
        "src/domain",
        &[
            "crate::adapter",
            "crate::infrastructure",
            "crate::application",
            "crate::port",
            "tokio::",
            "reqwest::",
            "teloxide::",
        ],
    );

    assert!(
        hits.is_empty(),
        "found forbidden imports in domain layer: {hits:#?}"
    );
}

#[test]
fn application_layer_has_no_direct_adapter_imports() {
    let hits = find_lines_containing(
        "src/application",
        &["crate::adapter::", "crate::infrastructure::", "reqwest::"],
    );
    assert!(
        hits.is_empty(),
        "application layer should only depend on domain and ports: {hits:#?}"
    );
}

#[test]
fn outbound_ports_do_not_name_concrete_adapters() {
    let hits = find_lines_containing("src/port", &["crate::adapter::", "crate::infrastructure::"]);
    assert!(hits.is_empty(), "ports must stay adapter-agnostic: {hits:#?}");
}

#[test]
fn operator_ports_are_transport_agnostic() {
    let hits = find_lines_containing("src/port/inbound/operator", &["std::path::Path", "PathBuf"]);
    assert!(
        hits.is_empty(),
        "operator inbound ports should not expose filesystem path types: {hits:#?}"
    );
}

#[test]
fn cli_operator_bridge_uses_operator_name() {
    let source = read_relative("src/adapter/inbound/cli/operator.rs");
    assert!(
        source.contains("pub fn operator() -> &'static dyn OperatorPort"),
        "operator bridge should expose `operator()` capability accessor"
    );
}

#[test]
fn secrets_are_read_from_environment_only() {
    let source = read_relative("src/infrastructure/config/settings.rs");
    assert!(
        source.contains("#[serde(skip)]\n    pub api_key"),
        "the catalog API key must never deserialize from the config file"
    );
}

#[test]
fn telegram_control_is_split() {
    for file in [
        "src/adapter/outbound/notifier/telegram/control/dispatch.rs",
        "src/adapter/outbound/notifier/telegram/control/render.rs",
        "src/adapter/outbound/notifier/telegram/control/mutate.rs",
        "src/adapter/outbound/notifier/telegram/control/tests.rs",
    ] {
        assert!(path_exists(file), "expected telegram control module `{file}`");
    }

    let source = read_relative("src/adapter/outbound/notifier/telegram/control.rs");
    assert!(
        source.contains("mod dispatch;")
            && source.contains("mod render;")
            && source.contains("mod mutate;"),
        "telegram control root should declare split submodules"
    );
    assert!(
        !source.contains("fn status_text("),
        "telegram control root should not own status rendering"
    );
    assert!(
        !source.contains("fn add_text("),
        "telegram control root should not own watch list mutation"
    );
}

#[test]
fn status_store_writes_atomically() {
    let source = read_relative("src/adapter/outbound/store/json_file.rs");
    assert!(
        source.contains("fs::rename"),
        "status snapshots must be replaced with a rename, not rewritten in place"
    );
}
