//! HTTP server over hyper with centralized error rendering.
//!
//! Each connection runs on its own task; each request flows through the
//! middleware chain and the router. An `Err` from any handler ends up
//! here and is rendered as the generic error page with the error's
//! status code (500 when no explicit mapping exists). Failure handling
//! is per request, never process-wide.

use bytes::Bytes;
use http_body_util::{BodyExt, Full};
use hyper::body::Incoming;
use hyper::server::conn::http1;
use hyper::service::Service;
use hyper_util::rt::TokioIo;
use std::future::Future;
use std::net::SocketAddr;
use std::pin::Pin;
use std::sync::Arc;
use tokio::net::{TcpListener, TcpStream};

use crate::exception::HttpError;
use crate::http::{Handler, Middleware, MiddlewareChain, Request, Response};
use crate::messages::Message;
use crate::templates;

/// HTTP server with middleware support.
pub struct HttpServer {
	handler: Arc<dyn Handler>,
	middlewares: Vec<Arc<dyn Middleware>>,
}

impl HttpServer {
	/// Create a new server with the given terminal handler (the router).
	pub fn new(handler: Arc<dyn Handler>) -> Self {
		Self {
			handler,
			middlewares: Vec::new(),
		}
	}

	/// Add a middleware. Middlewares run in the order they are added.
	pub fn with_middleware(mut self, middleware: Arc<dyn Middleware>) -> Self {
		self.middlewares.push(middleware);
		self
	}

	fn build_handler(&self) -> Arc<dyn Handler> {
		if self.middlewares.is_empty() {
			return self.handler.clone();
		}

		let mut chain = MiddlewareChain::new(self.handler.clone());
		for middleware in &self.middlewares {
			chain.add_middleware(middleware.clone());
		}
		Arc::new(chain)
	}

	/// Accept connections until ctrl-c.
	pub async fn run(self, addr: SocketAddr) -> std::io::Result<()> {
		let listener = TcpListener::bind(addr).await?;
		tracing::info!("listening on http://{}", addr);

		let handler = self.build_handler();

		loop {
			tokio::select! {
				accepted = listener.accept() => {
					let (stream, remote_addr) = accepted?;
					let handler = handler.clone();

					tokio::task::spawn(async move {
						if let Err(err) = Self::handle_connection(stream, remote_addr, handler).await {
							tracing::warn!(error = %err, "connection error");
						}
					});
				}
				_ = tokio::signal::ctrl_c() => {
					tracing::info!("shutdown signal received, stopping server");
					break;
				}
			}
		}

		Ok(())
	}

	async fn handle_connection(
		stream: TcpStream,
		remote_addr: SocketAddr,
		handler: Arc<dyn Handler>,
	) -> Result<(), Box<dyn std::error::Error + Send + Sync>> {
		let io = TokioIo::new(stream);
		let service = RequestService {
			handler,
			remote_addr,
		};

		http1::Builder::new().serve_connection(io, service).await?;

		Ok(())
	}
}

/// Render an error through the generic error page.
///
/// Falls back to a plain-text body if the error page itself fails to
/// render.
pub fn error_response(error: &HttpError) -> Response {
	let status = error.status();

	let mut context = tera::Context::new();
	context.insert("messages", &Vec::<Message>::new());
	context.insert("status", &status.as_u16());
	context.insert("message", &error.to_string());

	let mut response = match templates::render("error.html", &context) {
		Ok(response) => response,
		Err(render_error) => {
			tracing::error!(error = %render_error, "error page failed to render");
			Response::internal_server_error().with_body(error.to_string())
		}
	};
	response.status = status;
	response
}

/// Service adapter between hyper and the application handler.
struct RequestService {
	handler: Arc<dyn Handler>,
	remote_addr: SocketAddr,
}

impl Service<hyper::Request<Incoming>> for RequestService {
	type Response = hyper::Response<Full<Bytes>>;
	type Error = hyper::http::Error;
	type Future = Pin<Box<dyn Future<Output = Result<Self::Response, Self::Error>> + Send>>;

	fn call(&self, req: hyper::Request<Incoming>) -> Self::Future {
		let handler = self.handler.clone();
		let remote_addr = self.remote_addr;

		Box::pin(async move {
			let (parts, body) = req.into_parts();

			let response = match body.collect().await {
				Ok(collected) => {
					let mut request = Request::new(
						parts.method,
						parts.uri,
						parts.version,
						parts.headers,
						collected.to_bytes(),
					);
					request.remote_addr = Some(remote_addr);

					handler
						.handle(request)
						.await
						.unwrap_or_else(|err| error_response(&err))
				}
				Err(err) => {
					error_response(&HttpError::Internal(format!("body read failed: {}", err)))
				}
			};

			let mut builder = hyper::Response::builder().status(response.status);
			for (key, value) in response.headers.iter() {
				builder = builder.header(key, value);
			}
			builder.body(Full::new(response.body))
		})
	}
}
