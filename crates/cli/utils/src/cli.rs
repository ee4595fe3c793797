#[async_trait::async_trait]
pub trait CliCommand: Send + Sync {
    async fn call(&self) -> anyhow::Result<()>;
}
