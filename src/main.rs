use anyhow::Context;
use clap::Parser;
use medicode::utils::{logger, validation::Validate};
use medicode::{
    ChatCompletionsBackend, CliConfig, CodingClient, CodingSession, MedicodeError, PromptComposer,
    Renderer, SessionOutcome,
};

fn config_failure(e: &MedicodeError) -> ! {
    tracing::error!("❌ Configuration failed: {}", e);
    tracing::error!("💡 Suggestion: {}", e.recovery_suggestion());
    eprintln!("❌ {}", e.user_friendly_message());
    eprintln!("💡 {}", e.recovery_suggestion());
    std::process::exit(1);
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = CliConfig::parse();

    // 初始化日誌
    if cli.json_logs {
        logger::init_json_logger(cli.verbose);
    } else {
        logger::init_cli_logger(cli.verbose);
    }

    tracing::info!("Starting medicode");
    if cli.verbose {
        tracing::debug!("CLI config: {:?}", cli);
    }

    if let Err(e) = cli.validate() {
        config_failure(&e);
    }

    let client_config = match cli.client_config() {
        Ok(config) => config,
        Err(e) => config_failure(&e),
    };
    tracing::debug!("Client config: {:?}", client_config);

    let note = match cli.read_note() {
        Ok(note) => note,
        Err(e) => config_failure(&e),
    };

    let composer = PromptComposer::new(client_config.model.clone());
    let client = CodingClient::new(ChatCompletionsBackend::new(client_config));
    let session = CodingSession::new(composer, client);

    let outcome = session.run(cli.code_type, &note, cli.enrich).await;

    {
        let mut renderer = Renderer::new(std::io::stdout().lock());
        renderer
            .render(&outcome)
            .context("failed to write result to stdout")?;
    }

    if let SessionOutcome::Failed(_) = outcome {
        std::process::exit(2);
    }

    Ok(())
}
