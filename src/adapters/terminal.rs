use crate::core::lookup::Screen;
use crate::core::presenter::{CompanyView, Field, PartnersView, NO_PARTNERS};
use crate::domain::ports::OutputFormat;
use crate::utils::error::Result;

pub const TITLE: &str = "Busca CNPJ da BrasilAPI 🏢";
pub const INTRO: &str = "Digite um CNPJ para buscar informações da empresa correspondente.";
pub const INPUT_HELP: &str = "Aceita CNPJ com pontos, barras e traços ou apenas números.";
pub const SUCCESS: &str = "Dados encontrados com sucesso!";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RenderOptions {
    pub format: OutputFormat,
    /// Total width of the two-column block.
    pub width: usize,
}

impl Default for RenderOptions {
    fn default() -> Self {
        Self {
            format: OutputFormat::Text,
            width: 100,
        }
    }
}

pub fn render_banner() -> String {
    let mut out = heading(TITLE, '=');
    out.push_str(INTRO);
    out.push('\n');
    out.push_str(INPUT_HELP);
    out.push('\n');
    out
}

pub fn render_screen(screen: &Screen, options: &RenderOptions) -> Result<String> {
    match options.format {
        OutputFormat::Json => Ok(serde_json::to_string_pretty(screen)?),
        OutputFormat::Text => Ok(match screen {
            Screen::Found { company, .. } => render_company(company, options.width),
            Screen::Failed { message, .. } => format!("❌ {}\n", message),
        }),
    }
}

fn render_company(company: &CompanyView, width: usize) -> String {
    let mut out = format!("✅ {}\n\n", SUCCESS);

    out.push_str(&heading("Informações da Empresa", '='));
    let left: Vec<String> = company.identity.iter().flat_map(field_lines).collect();
    let right: Vec<String> = company
        .address
        .iter()
        .chain(&company.status)
        .chain(std::iter::once(&company.tax_regime))
        .flat_map(field_lines)
        .collect();
    out.push_str(&columns(&left, &right, width / 2));

    out.push('\n');
    out.push_str(&heading("Sócios", '-'));
    match &company.partners {
        PartnersView::Empty => {
            out.push_str(NO_PARTNERS);
            out.push('\n');
        }
        PartnersView::Listed(partners) => {
            for partner in partners {
                for line in partner.fields.iter().flat_map(field_lines) {
                    out.push_str(&line);
                    out.push('\n');
                }
                out.push_str("---\n");
            }
        }
    }

    out.push('\n');
    out.push_str(&heading("Atividades", '-'));
    out.push_str("Atividade Principal:\n");
    out.push_str(&format!("- {}\n", company.activities.primary));
    if !company.activities.secondary.is_empty() {
        out.push_str("Atividades Secundárias:\n");
        for activity in &company.activities.secondary {
            out.push_str(&format!("- {}\n", activity));
        }
    }

    out
}

/// `Label: first line`, continuation lines indented under the value.
fn field_lines(field: &Field) -> Vec<String> {
    let prefix = format!("{}: ", field.label);
    let indent = " ".repeat(prefix.chars().count());
    field
        .lines
        .iter()
        .enumerate()
        .map(|(i, line)| {
            if i == 0 {
                format!("{}{}", prefix, line)
            } else {
                format!("{}{}", indent, line)
            }
        })
        .collect()
}

fn columns(left: &[String], right: &[String], left_width: usize) -> String {
    let rows = left.len().max(right.len());
    let mut out = String::new();

    for row in 0..rows {
        let l = left.get(row).map(String::as_str).unwrap_or_default();
        let r = right.get(row).map(String::as_str).unwrap_or_default();

        if r.is_empty() {
            out.push_str(l);
        } else {
            let used = l.chars().count();
            let padding = if used < left_width { left_width - used } else { 1 };
            out.push_str(l);
            out.push_str(&" ".repeat(padding));
            out.push_str(r);
        }
        out.push('\n');
    }

    out
}

fn heading(text: &str, underline: char) -> String {
    format!(
        "{}\n{}\n",
        text,
        underline.to_string().repeat(text.chars().count())
    )
}
