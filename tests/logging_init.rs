use drill_core::logging::init_tracing;

#[test]
fn existing_global_subscriber_is_kept() {
    let subscriber = tracing_subscriber::fmt().with_writer(std::io::sink).finish();
    tracing::subscriber::set_global_default(subscriber).unwrap();

    init_tracing();
    init_tracing();
    tracing::info!("still logging");
}
