use crate::fs::JailedFs;
use axum::body::Body;
use axum::response::Response;
use http::Request;
use tower::ServiceExt;
use tower_http::services::ServeFile;

impl JailedFs {
    /// Answer `req` with the file `name` resolves to, or with the directory's
    /// `index.html` when it resolves to a directory.
    pub async fn serve_file<B>(&self, req: Request<B>, name: &str) -> Response
    where
        B: Send + 'static,
    {
        let mut path = self.resolve(name);
        if tokio::fs::metadata(&path).await.is_ok_and(|m| m.is_dir()) {
            path.push("index.html");
        }
        tracing::trace!(name, path = %path.display(), "serve_file");
        match ServeFile::new(path).oneshot(req).await {
            Ok(res) => res.map(Body::new),
            Err(never) => match never {},
        }
    }
}
