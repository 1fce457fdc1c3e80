pub fn run() -> anyhow::Result<()> {
    println!("claw-context {}", env!("CARGO_PKG_VERSION"));
    println!("Session context analysis and memory sync for chat transcripts");
    Ok(())
}
