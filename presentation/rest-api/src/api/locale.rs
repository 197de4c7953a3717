use std::sync::Arc;

use business::domain::localization::locale::with_locale;
use poem::http::header::ACCEPT_LANGUAGE;
use poem::{Endpoint, Middleware, Request, Result};

/// Resolves response messages in the best supported locale named by the
/// request's `Accept-Language` header.
///
/// Requests without a supported language keep the catalog default.
pub struct RequestLocale {
    supported: Arc<Vec<String>>,
}

impl RequestLocale {
    pub fn new(supported: Vec<String>) -> Self {
        Self {
            supported: Arc::new(supported),
        }
    }
}

impl<E: Endpoint> Middleware<E> for RequestLocale {
    type Output = RequestLocaleEndpoint<E>;

    fn transform(&self, ep: E) -> Self::Output {
        RequestLocaleEndpoint {
            inner: ep,
            supported: self.supported.clone(),
        }
    }
}

pub struct RequestLocaleEndpoint<E> {
    inner: E,
    supported: Arc<Vec<String>>,
}

impl<E: Endpoint> Endpoint for RequestLocaleEndpoint<E> {
    type Output = E::Output;

    async fn call(&self, req: Request) -> Result<Self::Output> {
        let locale = req
            .headers()
            .get(ACCEPT_LANGUAGE)
            .and_then(|value| value.to_str().ok())
            .and_then(|header| preferred_locale(header, &self.supported));

        match locale {
            Some(locale) => with_locale(locale, self.inner.call(req)).await,
            None => self.inner.call(req).await,
        }
    }
}

/// Primary subtag of the highest weighted supported language, e.g. "es" for
/// `fr;q=0.9, es-ES;q=0.8` when only `en` and `es` are supported.
pub(crate) fn preferred_locale(header: &str, supported: &[String]) -> Option<String> {
    let mut best: Option<(String, f32)> = None;

    for item in header.split(',') {
        let mut parts = item.split(';');
        let tag = parts.next().unwrap_or_default().trim().to_lowercase();
        let quality = parts
            .find_map(|param| param.trim().strip_prefix("q="))
            .and_then(|q| q.trim().parse::<f32>().ok())
            .unwrap_or(1.0);
        let primary = tag.split('-').next().unwrap_or_default();

        if quality <= 0.0 || !supported.iter().any(|locale| locale == primary) {
            continue;
        }
        if best.as_ref().is_none_or(|(_, weight)| quality > *weight) {
            best = Some((primary.to_string(), quality));
        }
    }

    best.map(|(locale, _)| locale)
}
