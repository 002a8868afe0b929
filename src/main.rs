// src/main.rs

#[cfg(target_os = "linux")]
mod exporter {
    use anyhow::Context;
    use clap::Parser;
    use prometheus::Registry;
    use tokio::{net::TcpListener, signal};
    use tokio_util::sync::CancellationToken;
    use tracing::{error, info};

    use sps30::{
        api::{self, ApiState},
        config::Config,
        linux::LinuxI2cTransport,
        logging,
        metrics::PrometheusMetrics,
        HealthFlag, Sensor, SharedSensor, Sps30, Supervisor,
    };

    pub async fn run() -> anyhow::Result<()> {
        let config = Config::parse();
        logging::init(config.log_format, &config.log_level).context("failed to initialise logging")?;
        info!("Application starting");

        let transport = LinuxI2cTransport::open(&config.i2c_bus, config.i2c_address)
            .with_context(|| format!("failed to open I2C device {}", config.i2c_bus.display()))?;
        // The poller and /clean share one driver, locked per operation.
        let mut sensor = SharedSensor::new(Sps30::new(transport));
        sensor.init().await.context("sensor init failed")?;

        let registry = Registry::new();
        let metrics = PrometheusMetrics::register(&registry).context("failed to register metrics")?;
        let health = HealthFlag::new();

        let listener = TcpListener::bind(config.listen_addr)
            .await
            .with_context(|| format!("failed to bind {}", config.listen_addr))?;

        let token = CancellationToken::new();
        let supervisor = Supervisor::new(sensor.clone(), metrics, health.clone(), config.supervisor());
        let poller = tokio::spawn(supervisor.run(token.clone()));

        let state = ApiState {
            health,
            registry,
            sensor,
            clean_enabled: config.enable_clean_endpoint,
        };

        info!(addr = %config.listen_addr, "Exporter listening");
        let shutdown = token.clone();
        let served = axum::serve(listener, api::router(state))
            .with_graceful_shutdown(async move {
                tokio::select! {
                    _ = shutdown_signal() => info!("Shutting down application"),
                    _ = shutdown.cancelled() => {}
                }
            })
            .await;
        if let Err(e) = &served {
            error!(error = %e, "HTTP server exited with error");
        }

        token.cancel();
        if let Err(e) = poller.await {
            error!(error = %e, "Polling task failed");
        }
        info!("Application stopped");

        served.context("HTTP server failed")
    }

    async fn shutdown_signal() {
        let ctrl_c = async {
            if let Err(e) = signal::ctrl_c().await {
                error!(error = %e, "Failed to install Ctrl+C handler");
                std::future::pending::<()>().await;
            }
        };

        let terminate = async {
            match signal::unix::signal(signal::unix::SignalKind::terminate()) {
                Ok(mut stream) => {
                    stream.recv().await;
                }
                Err(e) => {
                    error!(error = %e, "Failed to install SIGTERM handler");
                    std::future::pending::<()>().await;
                }
            }
        };

        tokio::select! {
            _ = ctrl_c => {},
            _ = terminate => {},
        }
    }
}

#[cfg(target_os = "linux")]
#[tokio::main]
async fn main() -> anyhow::Result<()> {
    exporter::run().await
}

#[cfg(not(target_os = "linux"))]
fn main() -> anyhow::Result<()> {
    anyhow::bail!("sps30-exporter needs a Linux I2C character device")
}
