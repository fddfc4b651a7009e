//! Page metadata (title, preview image) for token detail links.

use crate::{constants::NATIVE_CHAIN_ID, Error};
use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use std::str::FromStr;
use url::Url;

/// Chain names as spelled by the token data API.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Chain {
    Ethereum,
    Polygon,
    Base,
    Mode,
}

impl FromStr for Chain {
    type Err = &'static str;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "ETHEREUM" => Ok(Chain::Ethereum),
            "POLYGON" => Ok(Chain::Polygon),
            "BASE" => Ok(Chain::Base),
            "MODE" => Ok(Chain::Mode),
            _ => Err("Invalid chain name"),
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TokenProject {
    pub logo_url: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TokenWebAsset {
    pub symbol: Option<String>,
    pub name: Option<String>,
    pub project: Option<TokenProject>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TokenWebQueryVariables {
    pub chain: String,
    pub address: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct FormattedToken {
    pub title: String,
    pub image: String,
    pub url: String,
    pub symbol: String,
    pub og_image: Option<String>,
    pub name: String,
}

/// Where token metadata comes from. The transport is not our concern.
#[async_trait]
pub trait TokenDataSource {
    async fn token(&self, variables: TokenWebQueryVariables) -> Result<Option<TokenWebAsset>, Error>;
}

pub fn format_title_name(symbol: Option<&str>, name: Option<&str>) -> String {
    if let Some(symbol) = symbol.filter(|s| !s.is_empty()) {
        return format!("Get {symbol} on Uniswap");
    }
    if let Some(name) = name.filter(|n| !n.is_empty()) {
        return format!("Get {name} on Uniswap");
    }
    "View Token on Uniswap".to_string()
}

/// Maps the native placeholder to the address the data API indexes it under.
pub fn convert_token_address(network_name: &str, token_address: &str) -> Option<String> {
    if token_address == NATIVE_CHAIN_ID {
        return match Chain::from_str(network_name) {
            Ok(Chain::Polygon) => Some("0x0000000000000000000000000000000000001010".to_string()),
            _ => None,
        };
    }
    Some(token_address.to_string())
}

pub fn token_image_url(url: &str, network_name: &str, token_address: &str) -> Result<String, Error> {
    let origin = Url::parse(url)?.origin().ascii_serialization();
    Ok(format!(
        "{origin}/api/image/tokens/{network_name}/{token_address}"
    ))
}

pub fn token_query_variables(network_name: &str, token_address: &str) -> TokenWebQueryVariables {
    let chain = network_name.to_uppercase();
    let address = convert_token_address(&chain, token_address);
    TokenWebQueryVariables { chain, address }
}

pub fn format_token(
    network_name: &str,
    token_address: &str,
    url: &str,
    asset: Option<TokenWebAsset>,
) -> Result<Option<FormattedToken>, Error> {
    let image = token_image_url(url, network_name, token_address)?;
    let Some(asset) = asset else {
        return Ok(None);
    };

    let title = format_title_name(asset.symbol.as_deref(), asset.name.as_deref());

    Ok(Some(FormattedToken {
        title,
        image,
        url: url.to_string(),
        symbol: asset.symbol.unwrap_or_else(|| "UNK".to_string()),
        og_image: asset.project.and_then(|project| project.logo_url),
        name: asset.name.unwrap_or_else(|| "Token".to_string()),
    }))
}

pub async fn get_token(
    source: &(impl TokenDataSource + Sync),
    network_name: &str,
    token_address: &str,
    url: &str,
) -> Result<Option<FormattedToken>, Error> {
    // fail on a malformed url before spending a query
    token_image_url(url, network_name, token_address)?;

    let variables = token_query_variables(network_name, token_address);
    let asset = source.token(variables).await?;
    format_token(network_name, token_address, url, asset)
}

#[cfg(test)]
mod tests {
    use super::*;
    use futures::executor::block_on;
    use pretty_assertions::assert_eq;
    use std::sync::Mutex;

    struct StubSource {
        asset: Option<TokenWebAsset>,
        seen: Mutex<Vec<TokenWebQueryVariables>>,
    }

    #[async_trait]
    impl TokenDataSource for StubSource {
        async fn token(
            &self,
            variables: TokenWebQueryVariables,
        ) -> Result<Option<TokenWebAsset>, Error> {
            self.seen.lock().unwrap().push(variables);
            Ok(self.asset.clone())
        }
    }

    #[test]
    fn title_prefers_symbol_then_name() {
        assert_eq!(format_title_name(Some("UNI"), Some("Uniswap")), "Get UNI on Uniswap");
        assert_eq!(format_title_name(None, Some("Uniswap")), "Get Uniswap on Uniswap");
        assert_eq!(format_title_name(None, None), "View Token on Uniswap");
    }

    #[test]
    fn native_placeholder_only_maps_on_polygon() {
        assert_eq!(
            convert_token_address("POLYGON", NATIVE_CHAIN_ID).as_deref(),
            Some("0x0000000000000000000000000000000000001010")
        );
        assert_eq!(convert_token_address("ETHEREUM", NATIVE_CHAIN_ID), None);
        assert_eq!(
            convert_token_address("ETHEREUM", "0xabc").as_deref(),
            Some("0xabc")
        );
    }

    #[test]
    fn formats_asset_with_defaults() {
        let json = r#"{"symbol": null, "name": null, "project": {"logoUrl": "https://logo"}}"#;
        let asset: TokenWebAsset = serde_json::from_str(json).unwrap();

        let formatted = format_token("polygon", "NATIVE", "https://app.example.org/tokens/x", Some(asset))
            .unwrap()
            .unwrap();

        assert_eq!(formatted.title, "View Token on Uniswap");
        assert_eq!(
            formatted.image,
            "https://app.example.org/api/image/tokens/polygon/NATIVE"
        );
        assert_eq!(formatted.symbol, "UNK");
        assert_eq!(formatted.name, "Token");
        assert_eq!(formatted.og_image.as_deref(), Some("https://logo"));
    }

    #[test]
    fn get_token_queries_with_uppercase_chain() {
        let source = StubSource {
            asset: Some(TokenWebAsset {
                symbol: Some("WMATIC".to_string()),
                name: Some("Wrapped Matic".to_string()),
                project: None,
            }),
            seen: Mutex::new(Vec::new()),
        };

        let formatted = block_on(get_token(&source, "polygon", "NATIVE", "https://app.example.org"))
            .unwrap()
            .unwrap();

        assert_eq!(formatted.title, "Get WMATIC on Uniswap");
        assert_eq!(
            source.seen.lock().unwrap().as_slice(),
            &[TokenWebQueryVariables {
                chain: "POLYGON".to_string(),
                address: Some("0x0000000000000000000000000000000000001010".to_string()),
            }]
        );
    }

    #[test]
    fn missing_asset_and_bad_url() {
        let source = StubSource {
            asset: None,
            seen: Mutex::new(Vec::new()),
        };

        assert_eq!(
            block_on(get_token(&source, "mode", "0xabc", "https://app.example.org")),
            Ok(None)
        );
        assert!(matches!(
            block_on(get_token(&source, "mode", "0xabc", "not a url")),
            Err(Error::Url(_))
        ));
        assert_eq!(source.seen.lock().unwrap().len(), 1);
    }
}
