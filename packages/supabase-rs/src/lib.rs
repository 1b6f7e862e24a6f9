// Minimal PostgREST client for a hosted Supabase backend.
//
// Covers only what the storefront needs: public RPC functions and table
// select/insert/update using the anon key. Row-level policies upstream
// decide what that key can see.

use reqwest::{header, Client, Response, StatusCode};
use serde::de::DeserializeOwned;
use serde::Serialize;
use url::Url;

#[derive(Debug, thiserror::Error)]
pub enum SupabaseError {
    #[error("invalid base url: {0}")]
    BadUrl(#[from] url::ParseError),
    #[error("anon key is not a valid header value")]
    BadKey,
    #[error("request failed: {0}")]
    Http(#[from] reqwest::Error),
    #[error("backend returned {status}: {body}")]
    Status { status: StatusCode, body: String },
}

#[derive(Debug, Clone)]
pub struct SupabaseOptions {
    /// Project base URL, e.g. `https://abc123.supabase.co`.
    pub base_url: String,
    /// The public (anon) API key.
    pub anon_key: String,
}

#[derive(Debug, Clone)]
pub struct SupabaseClient {
    rest_url: String,
    headers: header::HeaderMap,
    client: Client,
}

impl SupabaseClient {
    pub fn new(options: SupabaseOptions) -> Result<Self, SupabaseError> {
        // Validate early so a typoed env var fails at startup, not mid-session.
        let base = Url::parse(options.base_url.trim_end_matches('/'))?;

        let key: header::HeaderValue = options
            .anon_key
            .parse()
            .map_err(|_| SupabaseError::BadKey)?;
        let mut headers = header::HeaderMap::new();
        headers.insert("apikey", key.clone());
        let mut bearer: header::HeaderValue = format!("Bearer {}", options.anon_key)
            .parse()
            .map_err(|_| SupabaseError::BadKey)?;
        bearer.set_sensitive(true);
        headers.insert(header::AUTHORIZATION, bearer);

        Ok(Self {
            rest_url: format!("{}/rest/v1", base.as_str().trim_end_matches('/')),
            headers,
            client: Client::new(),
        })
    }

    /// Call a database function exposed over `/rest/v1/rpc/<function>`.
    ///
    /// PostgREST returns set-returning functions as a JSON array; an empty
    /// array is how "no such row" looks for the public lookup functions.
    pub async fn rpc<P, T>(&self, function: &str, params: &P) -> Result<Vec<T>, SupabaseError>
    where
        P: Serialize + ?Sized,
        T: DeserializeOwned,
    {
        let url = format!("{}/rpc/{}", self.rest_url, function);
        let res = self
            .client
            .post(&url)
            .headers(self.headers.clone())
            .json(params)
            .send()
            .await?;
        Self::rows(res).await
    }

    /// Read rows from a table. `query` holds PostgREST filter pairs, e.g.
    /// `("status", "eq.active")` or `("order", "created_at.desc")`.
    pub async fn select<T>(&self, table: &str, query: &[(&str, &str)]) -> Result<Vec<T>, SupabaseError>
    where
        T: DeserializeOwned,
    {
        let url = format!("{}/{}", self.rest_url, table);
        let res = self
            .client
            .get(&url)
            .headers(self.headers.clone())
            .query(query)
            .send()
            .await?;
        Self::rows(res).await
    }

    /// Insert a row and return the representation the backend stored.
    pub async fn insert<B, T>(&self, table: &str, body: &B) -> Result<Vec<T>, SupabaseError>
    where
        B: Serialize + ?Sized,
        T: DeserializeOwned,
    {
        let url = format!("{}/{}", self.rest_url, table);
        let res = self
            .client
            .post(&url)
            .headers(self.headers.clone())
            .header("Prefer", "return=representation")
            .json(body)
            .send()
            .await?;
        Self::rows(res).await
    }

    /// Patch rows matching the filter pairs. The response body is ignored.
    pub async fn update<B>(
        &self,
        table: &str,
        query: &[(&str, &str)],
        body: &B,
    ) -> Result<(), SupabaseError>
    where
        B: Serialize + ?Sized,
    {
        let url = format!("{}/{}", self.rest_url, table);
        let res = self
            .client
            .patch(&url)
            .headers(self.headers.clone())
            .query(query)
            .json(body)
            .send()
            .await?;
        let status = res.status();
        if !status.is_success() {
            let body = res.text().await.unwrap_or_default();
            return Err(SupabaseError::Status { status, body });
        }
        Ok(())
    }

    async fn rows<T: DeserializeOwned>(res: Response) -> Result<Vec<T>, SupabaseError> {
        let status = res.status();
        if !status.is_success() {
            let body = res.text().await.unwrap_or_default();
            return Err(SupabaseError::Status { status, body });
        }
        Ok(res.json().await?)
    }
}
