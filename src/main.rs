use anyhow::Result;
use quiz_form_builder::utils::logging;
use quiz_form_builder::{App, Config};

#[tokio::main]
async fn main() -> Result<()> {
    // 加载配置
    let config = Config::from_env();

    // 初始化日志
    logging::init(config.verbose_logging);

    // 初始化并运行应用
    let report = App::initialize(config)?.run().await?;

    println!("{}", report.form_link);

    Ok(())
}
