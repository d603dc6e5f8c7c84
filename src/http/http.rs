use std::future::Future;
use std::io;
use std::net::TcpListener;
use std::time::{Duration, Instant};
use actix_web::{App, HttpResponse, HttpServer, web};
use actix_web::dev::Service;
use actix_web::http::StatusCode;
use actix_web::web::ServiceConfig;
use futures_util::future::{select, Either};
use log::{error, info, warn, Level};
use crate::http::enums::shutdown_signal::ShutdownSignal;
use crate::http::structs::http_server_instance::HttpServerInstance;
use crate::http::structs::http_server_options::HttpServerOptions;
use crate::http::types::SignalHandler;
use crate::ssl::ssl::{create_file_based_resolver, create_server_config_with_resolver};

/// Paths never written to the request log.
pub const IGNORED_LOG_PATHS: [&str; 2] = ["/healthz", "/readyz"];

/// Handler answering every request with an empty 200 OK.
pub async fn always_ok() -> HttpResponse
{
    HttpResponse::Ok().finish()
}

pub fn http_service_routes(options: &HttpServerOptions) -> impl Fn(&mut ServiceConfig) + Clone + Send + 'static
{
    let health = options.health.clone();
    let ready = options.ready.clone();
    let init_routes = options.init_routes.clone();
    move |cfg: &mut ServiceConfig| {
        cfg.route("/healthz", match &health {
            None => web::get().to(always_ok),
            Some(health) => health(),
        });
        cfg.route("/readyz", match &ready {
            None => web::get().to(always_ok),
            Some(ready) => ready(),
        });
        if let Some(init_routes) = &init_routes {
            init_routes(cfg);
        }
    }
}

pub fn should_log_request(path: &str) -> bool
{
    !IGNORED_LOG_PATHS.iter().any(|ignored| ignored.eq_ignore_ascii_case(path))
}

pub fn request_log_level(status: StatusCode, has_error: bool) -> Level
{
    if has_error || status.is_server_error() {
        Level::Warn
    } else {
        Level::Info
    }
}

fn log_request(latency: Duration, status: StatusCode, client_ip: &str, method: &str, path: &str, error: Option<String>)
{
    let level = request_log_level(status, error.is_some());
    match error {
        None => log::log!(level, "[HTTP] latency={:?} status={} clientip={} method={} path={}", latency, status.as_u16(), client_ip, method, path),
        Some(error) => log::log!(level, "[HTTP] latency={:?} status={} clientip={} method={} path={} error={}", latency, status.as_u16(), client_ip, method, path, error)
    }
}

/// Binds `0.0.0.0` on the effective port and starts the server.
pub fn http_service(options: HttpServerOptions) -> io::Result<HttpServerInstance>
{
    let listener = TcpListener::bind(("0.0.0.0", options.effective_port()))?;
    http_service_with_listener(options, listener)
}

/// Starts the server on an already bound listener.
///
/// With TLS enabled the certificate is loaded once up front. A failure is
/// only a warning: the server still starts and every handshake fails until
/// the files become readable.
pub fn http_service_with_listener(options: HttpServerOptions, listener: TcpListener) -> io::Result<HttpServerInstance>
{
    let local_addr = listener.local_addr()?;
    let routes = http_service_routes(&options);

    let server = HttpServer::new(move || {
        App::new()
            .wrap_fn(|request, service| {
                let start = Instant::now();
                let path = request.path().to_string();
                let method = request.method().to_string();
                let client_ip = request.connection_info().realip_remote_addr().unwrap_or("-").to_string();
                let response = service.call(request);
                async move {
                    let response = response.await?;
                    if should_log_request(&path) {
                        let error = response.response().error().map(|e| e.to_string());
                        log_request(start.elapsed(), response.status(), &client_ip, &method, &path, error);
                    }
                    Ok(response)
                }
            })
            .configure(routes.clone())
    });

    if options.tls_enabled() {
        info!("[HTTP] Starting server listener with TLS on {}", local_addr);
        let resolver = create_file_based_resolver(
            &options.tls_cert,
            &options.tls_key,
            options.effective_cert_cache_duration()
        );
        if let Err(e) = resolver.cache().get_certificate() {
            warn!("[HTTP] Initial TLS certificate load failed, handshakes will fail until it is readable: {}", e);
        }
        let tls_config = create_server_config_with_resolver(resolver.clone()).map_err(io::Error::other)?;
        let server = server
            .listen_rustls_0_23(listener, tls_config)?
            .disable_signals()
            .run();

        return Ok(HttpServerInstance {
            handle: server.handle(),
            server,
            local_addr,
            resolver: Some(resolver),
        });
    }

    info!("[HTTP] Starting server listener on {}", local_addr);
    let server = server
        .listen(listener)?
        .disable_signals()
        .run();

    Ok(HttpServerInstance {
        handle: server.handle(),
        server,
        local_addr,
        resolver: None,
    })
}

/// Resolves with the first of SIGINT, SIGTERM or SIGQUIT.
pub async fn wait_for_shutdown_signal() -> io::Result<ShutdownSignal>
{
    #[cfg(unix)]
    {
        use tokio::signal::unix::{signal, SignalKind};
        let mut terminate = signal(SignalKind::terminate())?;
        let mut quit = signal(SignalKind::quit())?;
        tokio::select! {
            result = tokio::signal::ctrl_c() => result.map(|_| ShutdownSignal::Interrupt),
            _ = terminate.recv() => Ok(ShutdownSignal::Terminate),
            _ = quit.recv() => Ok(ShutdownSignal::Quit),
        }
    }
    #[cfg(not(unix))]
    {
        tokio::signal::ctrl_c().await.map(|_| ShutdownSignal::Interrupt)
    }
}

/// Runs the server until a shutdown signal arrives, then stops it gracefully.
pub async fn listen(instance: HttpServerInstance, signal_handler: Option<SignalHandler>) -> io::Result<()>
{
    listen_until(instance, wait_for_shutdown_signal(), signal_handler).await
}

/// Like [`listen`], with the shutdown trigger supplied by the caller.
pub async fn listen_until<F>(instance: HttpServerInstance, shutdown: F, signal_handler: Option<SignalHandler>) -> io::Result<()>
where
    F: Future<Output = io::Result<ShutdownSignal>>,
{
    let HttpServerInstance { handle, server, local_addr, .. } = instance;
    info!("[HTTP] Starting listener on {}", local_addr);

    let server = std::pin::pin!(server);
    let shutdown = std::pin::pin!(shutdown);

    match select(server, shutdown).await {
        Either::Left((result, _)) => {
            match &result {
                Ok(_) => warn!("[HTTP] Server on {} was instructed to close", local_addr),
                Err(e) => error!("[HTTP] Server on {} failed: {}", local_addr, e)
            }
            info!("[HTTP] Listener exited");
            result
        }
        Either::Right((Ok(signal), server)) => {
            info!("[HTTP] Received signal: {}", signal);
            if let Some(signal_handler) = signal_handler {
                signal_handler(signal);
            }
            info!("[HTTP] Stopping HTTP server");
            handle.stop(true).await;
            server.await
        }
        Either::Right((Err(e), server)) => {
            error!("[HTTP] Unable to listen for shutdown signals: {}", e);
            handle.stop(true).await;
            server.await?;
            Err(e)
        }
    }
}
