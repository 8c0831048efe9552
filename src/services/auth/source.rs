/*
 * Responsibility
 * - 受信リクエストの header / query を読み取り専用で見せる view
 * - axum/http の型はここで吸収し、認証ロジックには「最初の値」だけを渡す
 */
use std::borrow::Cow;

use axum::http::HeaderMap;

/// header map と生の query string に対する読み取り専用 view。
///
/// - header 名の照合は case-insensitive (`HeaderMap` の仕様)
/// - query 名の照合も ASCII case-insensitive、値は form-urlencoded として decode する
#[derive(Debug, Clone, Copy)]
pub struct RequestKeySource<'a> {
    headers: &'a HeaderMap,
    query: Option<&'a str>,
}

impl<'a> RequestKeySource<'a> {
    pub fn new(headers: &'a HeaderMap, query: Option<&'a str>) -> Self {
        Self { headers, query }
    }

    /// `name` header の最初の値。header 自体が無ければ `None`。
    ///
    /// 空文字の値も「値あり」として返す (query へのフォールバックはしない)。
    pub fn first_header(&self, name: &str) -> Option<&'a [u8]> {
        self.headers
            .get_all(name)
            .iter()
            .next()
            .map(|value| value.as_bytes())
    }

    /// `name` query parameter の最初の値 (decode 済み)。
    pub fn first_query(&self, name: &str) -> Option<Cow<'a, str>> {
        let query = self.query?;

        url::form_urlencoded::parse(query.as_bytes())
            .find(|(key, _)| key.eq_ignore_ascii_case(name))
            .map(|(_, value)| value)
    }

    /// header → query の順で探し、見つかった最初の値を返す。
    /// どちらにも無ければ空。
    pub fn candidate_key(&self, name: &str) -> Cow<'a, [u8]> {
        if let Some(value) = self.first_header(name) {
            return Cow::Borrowed(value);
        }

        match self.first_query(name) {
            Some(Cow::Borrowed(value)) => Cow::Borrowed(value.as_bytes()),
            Some(Cow::Owned(value)) => Cow::Owned(value.into_bytes()),
            None => Cow::Borrowed(&[]),
        }
    }
}
