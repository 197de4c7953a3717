use std::future::Future;

tokio::task_local! {
    static REQUEST_LOCALE: String;
}

/// Runs `future` with `locale` as the locale of every catalog lookup it makes.
pub async fn with_locale<F: Future>(locale: impl Into<String>, future: F) -> F::Output {
    REQUEST_LOCALE.scope(locale.into(), future).await
}

/// Locale set by an enclosing [`with_locale`], if any.
pub fn current_locale() -> Option<String> {
    REQUEST_LOCALE.try_with(|locale| locale.clone()).ok()
}
