use super::*;

#[test]
fn display_prefixes_are_stable() {
    assert!(
        AlephError::layout("x")
            .to_string()
            .contains("layout error:")
    );
    assert!(
        AlephError::timeline("x")
            .to_string()
            .contains("timeline error:")
    );
    assert!(
        AlephError::config("x")
            .to_string()
            .contains("config error:")
    );
    assert!(
        AlephError::serde("x")
            .to_string()
            .contains("serialization error:")
    );
}

#[test]
fn authoring_message_names_step_and_id() {
    let err = AlephError::authoring(LifecycleFault::NotLive { op: "transform" }, Some("A")).at_step(3);
    let msg = err.to_string();
    assert!(msg.starts_with("authoring error: step 3:"), "{msg}");
    assert!(msg.contains("transform of an id that is not live"), "{msg}");
    assert!(msg.contains("'A'"), "{msg}");
}

#[test]
fn at_step_keeps_first_index_and_ignores_other_variants() {
    let err = AlephError::authoring(LifecycleFault::AlreadyLive, Some("A"))
        .at_step(1)
        .at_step(5);
    assert_eq!(err.as_authoring().unwrap().step, Some(1));

    let err = AlephError::layout("bad").at_step(2);
    assert!(err.as_authoring().is_none());
}

#[test]
fn other_preserves_source() {
    let base = std::io::Error::other("boom");
    let err = AlephError::Other(anyhow::Error::new(base));
    assert!(err.to_string().contains("boom"));
}
