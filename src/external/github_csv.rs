use anyhow::{Context, Result};
use async_trait::async_trait;
use csv::{ReaderBuilder, StringRecord};
use tracing::{info, warn};

use crate::external::dataset_provider::{DatasetError, DatasetProvider};
use crate::models::FinancialRecord;

/// Raw CSV snapshot of multi-year financial statements, one row per
/// company-year, published on GitHub by the upstream data project.
const DEFAULT_DATASET_URL: &str = "https://raw.githubusercontent.com/monicaneli/Analise_de_Indicadores_Financeiros_Automatizada/refs/heads/main/data/some_financial_statements_companies_2009_2023.csv";

pub struct GithubCsvProvider {
    client: reqwest::Client,
    url: String,
}

impl GithubCsvProvider {
    pub fn from_env() -> Self {
        let url = std::env::var("DATASET_URL").unwrap_or_else(|_| DEFAULT_DATASET_URL.to_string());
        Self {
            client: reqwest::Client::new(),
            url,
        }
    }
}

#[async_trait]
impl DatasetProvider for GithubCsvProvider {
    async fn load_dataset(&self) -> Result<Vec<FinancialRecord>, DatasetError> {
        info!("Fetching dataset snapshot from {}", self.url);

        let resp = self
            .client
            .get(&self.url)
            .send()
            .await
            .map_err(|e| DatasetError::Network(e.to_string()))?;

        if !resp.status().is_success() {
            return Err(DatasetError::BadResponse(format!(
                "dataset fetch returned HTTP {}",
                resp.status()
            )));
        }

        let body = resp
            .text()
            .await
            .map_err(|e| DatasetError::Network(e.to_string()))?;

        let records = parse_csv(&body)?;
        info!("Loaded {} financial records", records.len());
        Ok(records)
    }
}

/// Canonical column names after header normalization. The upstream file is
/// Portuguese-labelled; headers may carry stray whitespace, spaces or dashes
/// instead of underscores, and accented characters.
const COL_YEAR: &str = "Ano";
const COL_COMPANY: &str = "Empresa";
const COL_SECTOR: &str = "Categoria";
const COL_LIQUIDITY: &str = "Liquidez_Corrente";
const COL_CASH_FLOW: &str = "Fluxo_Caixa_Operacional";
const COL_MARGIN: &str = "Margem_Liquida";
const COL_EBITDA: &str = "EBITDA";

/// Collapse a raw header onto its canonical form: trim, replace spaces and
/// dashes with underscores, fold accented letters to plain ASCII.
pub(crate) fn normalize_header(raw: &str) -> String {
    raw.trim()
        .chars()
        .map(|c| match c {
            ' ' | '-' => '_',
            'á' | 'à' | 'â' | 'ã' | 'ä' => 'a',
            'é' | 'è' | 'ê' | 'ë' => 'e',
            'í' | 'ì' | 'î' | 'ï' => 'i',
            'ó' | 'ò' | 'ô' | 'õ' | 'ö' => 'o',
            'ú' | 'ù' | 'û' | 'ü' => 'u',
            'ç' => 'c',
            'Á' | 'À' | 'Â' | 'Ã' | 'Ä' => 'A',
            'É' | 'È' | 'Ê' | 'Ë' => 'E',
            'Í' | 'Ì' | 'Î' | 'Ï' => 'I',
            'Ó' | 'Ò' | 'Ô' | 'Õ' | 'Ö' => 'O',
            'Ú' | 'Ù' | 'Û' | 'Ü' => 'U',
            'Ç' => 'C',
            _ => c,
        })
        .collect()
}

struct ColumnIndex {
    year: usize,
    company: usize,
    sector: usize,
    liquidity: usize,
    cash_flow: usize,
    margin: usize,
    ebitda: usize,
}

impl ColumnIndex {
    fn from_headers(headers: &StringRecord) -> Result<Self, DatasetError> {
        let find = |name: &str| -> Result<usize, DatasetError> {
            headers
                .iter()
                .position(|h| normalize_header(h) == name)
                .ok_or_else(|| DatasetError::Parse(format!("missing column '{}'", name)))
        };

        Ok(Self {
            year: find(COL_YEAR)?,
            company: find(COL_COMPANY)?,
            sector: find(COL_SECTOR)?,
            liquidity: find(COL_LIQUIDITY)?,
            cash_flow: find(COL_CASH_FLOW)?,
            margin: find(COL_MARGIN)?,
            ebitda: find(COL_EBITDA)?,
        })
    }
}

/// Parse the CSV body into records. Rows with unparsable numeric fields are
/// skipped with a warning rather than failing the whole snapshot.
pub(crate) fn parse_csv(body: &str) -> Result<Vec<FinancialRecord>, DatasetError> {
    let mut reader = ReaderBuilder::new()
        .trim(csv::Trim::All)
        .from_reader(body.as_bytes());

    let headers = reader
        .headers()
        .map_err(|e| DatasetError::Parse(e.to_string()))?
        .clone();
    let columns = ColumnIndex::from_headers(&headers)?;

    let mut records = Vec::new();
    for (i, row) in reader.records().enumerate() {
        let row = row.map_err(|e| DatasetError::Parse(e.to_string()))?;
        match parse_row(&row, &columns) {
            Ok(record) => records.push(record),
            Err(e) => warn!("Skipping dataset row {}: {:#}", i + 2, e),
        }
    }

    Ok(records)
}

fn field<'a>(row: &'a StringRecord, idx: usize) -> Result<&'a str> {
    row.get(idx)
        .with_context(|| format!("row has no column {}", idx))
}

fn number(row: &StringRecord, idx: usize, name: &str) -> Result<f64> {
    field(row, idx)?
        .parse::<f64>()
        .with_context(|| format!("failed to parse {} value '{}'", name, row.get(idx).unwrap_or("")))
}

fn parse_row(row: &StringRecord, columns: &ColumnIndex) -> Result<FinancialRecord> {
    Ok(FinancialRecord {
        company: field(row, columns.company)?.to_string(),
        fiscal_year: field(row, columns.year)?
            .parse::<i32>()
            .with_context(|| format!("failed to parse fiscal year '{}'", row.get(columns.year).unwrap_or("")))?,
        sector: field(row, columns.sector)?.to_string(),
        current_liquidity: number(row, columns.liquidity, "liquidity")?,
        operating_cash_flow: number(row, columns.cash_flow, "operating cash flow")?,
        net_margin_pct: number(row, columns.margin, "net margin")?,
        ebitda: number(row, columns.ebitda, "EBITDA")?,
    })
}
