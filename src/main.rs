use std::sync::Arc;

use tokio::io::{AsyncBufReadExt, BufReader};

use health_assist::assistant::{Assistant, AssistantEvent};
use health_assist::chat::{SUGGESTED_QUERIES, Sender};
use health_assist::config::AssistantConfig;
use health_assist::wizard::catalog::{COMMON_SYMPTOMS, DURATION_OPTIONS, SEVERITY_OPTIONS};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Initialize tracing
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .with_target(false)
        .init();

    let config = AssistantConfig::from_env()?;

    eprintln!("🩺 Health Assist v{}", env!("CARGO_PKG_VERSION"));
    eprintln!(
        "   Reply delay: {}ms | Analysis delay: {}ms",
        config.reply_delay.as_millis(),
        config.analysis_delay.as_millis()
    );
    eprintln!("   Type a health question and press Enter.");
    eprintln!("   Wizard: /symptoms A,B | /duration <label> | /severity <value> | /next | /back");
    eprintln!("   Other:  /status | /suggest | /reset | /quit\n");

    let assistant = Arc::new(Assistant::new(config));

    // Print assistant events as they land
    let mut events = assistant.subscribe();
    tokio::spawn(async move {
        while let Ok(event) = events.recv().await {
            match event {
                AssistantEvent::MessageAppended(msg) if msg.sender == Sender::Bot => {
                    println!("\n🤖 {}\n", msg.text);
                    eprint!("> ");
                }
                AssistantEvent::TypingChanged(true) => eprintln!("⏳ Assistant is typing..."),
                AssistantEvent::WizardStepChanged(step) => {
                    eprintln!("➡️  Wizard step {}: {}", step.number(), step);
                    eprint!("> ");
                }
                AssistantEvent::AnalysisReady(result) => {
                    println!("\n📋 {} ({}% match)", result.condition, result.confidence);
                    println!("   {}", result.description);
                    for rec in &result.recommendations {
                        println!("   • {rec}");
                    }
                    println!();
                    eprint!("> ");
                }
                _ => {}
            }
        }
    });

    let stdin = tokio::io::stdin();
    let reader = BufReader::new(stdin);
    let mut lines = reader.lines();

    eprint!("> ");
    while let Some(line) = lines.next_line().await? {
        let line = line.trim();
        if line.is_empty() {
            eprint!("> ");
            continue;
        }

        match line.split_once(' ').unwrap_or((line, "")) {
            ("/quit", _) => break,
            ("/reset", _) => {
                assistant.reset_chat().await;
                assistant.reset_wizard().await;
                eprintln!("↺ Chat and wizard reset");
            }
            ("/suggest", _) => {
                eprintln!("Try asking:");
                for query in SUGGESTED_QUERIES {
                    eprintln!("   {query}");
                }
            }
            ("/status", _) => {
                let wizard = assistant.wizard_snapshot().await;
                let chat = assistant.chat_snapshot().await;
                eprintln!(
                    "Wizard: step {} ({}), symptoms: [{}], duration: {:?}, severity: {:?}",
                    wizard.step.number(),
                    wizard.step,
                    wizard.symptoms.join(", "),
                    wizard.duration,
                    wizard.severity
                );
                eprintln!(
                    "Chat: {} messages, typing: {}",
                    chat.messages.len(),
                    chat.typing
                );
            }
            ("/symptoms", rest) if !rest.is_empty() => {
                for label in rest.split(',').map(str::trim).filter(|s| !s.is_empty()) {
                    if !assistant.toggle_symptom(label).await {
                        eprintln!("⚠️  Symptom selection only works on step 1");
                        break;
                    }
                }
            }
            ("/symptoms", _) => {
                eprintln!("Options: {}", COMMON_SYMPTOMS.join(", "));
            }
            ("/duration", rest) if !rest.is_empty() => {
                if !assistant.set_duration(rest).await {
                    eprintln!("⚠️  Duration only works on step 2");
                }
            }
            ("/duration", _) => {
                eprintln!("Options: {}", DURATION_OPTIONS.join(" | "));
            }
            ("/severity", rest) if !rest.is_empty() => {
                if !assistant.set_severity(rest).await {
                    eprintln!("⚠️  Severity only works on step 3");
                }
            }
            ("/severity", _) => {
                for option in SEVERITY_OPTIONS {
                    eprintln!("   {}", option.label);
                }
            }
            ("/next", _) => {
                if assistant.advance_wizard().await {
                    if assistant.is_analyzing().await {
                        eprintln!("🔬 Analyzing your symptoms...");
                    }
                } else {
                    eprintln!("⚠️  Complete the current step first");
                }
            }
            ("/back", _) => {
                if !assistant.retreat_wizard().await {
                    eprintln!("⚠️  Already at the first step");
                }
            }
            _ => {
                if let Err(e) = assistant.send_message(line).await {
                    eprintln!("⚠️  {e}");
                }
            }
        }
        eprint!("> ");
    }

    assistant.shutdown().await;
    Ok(())
}
