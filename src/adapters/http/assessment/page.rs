//! Server-rendered questionnaire page.
//!
//! One page holds the form (sidebar), the explanation column and the result
//! card. Every label rendered into the form comes from the domain
//! vocabularies, so a submitted form always encodes.

use std::fmt::Write;
use std::ops::RangeInclusive;

use crate::domain::assessment::{
    ActivityDays, AlcoholFrequency, AnswerChoice, AnswerSheet, Assessment, Gender, MainMeals,
    ScreenTime, SnackFrequency, Transport, VegetableFrequency, WaterIntake, YesNo,
};

/// What the result column shows.
#[derive(Debug, Clone)]
pub enum ResultPanel<'a> {
    /// Awaiting input: no submission yet.
    Pending,
    Ready(&'a Assessment),
    Invalid(String),
    Failed,
}

/// Everything needed to render the page.
pub struct PageView<'a> {
    pub answers: &'a AnswerSheet,
    pub panel: ResultPanel<'a>,
    pub model_name: &'a str,
}

const STYLE: &str = r#"
body { margin: 0; font-family: system-ui, sans-serif; background-color: #f8f9fa; color: #212529; }
.layout { display: flex; min-height: 100vh; }
aside { width: 340px; padding: 20px; background: #ffffff; border-right: 1px solid #dee2e6; }
main { flex: 1; padding: 24px 40px; }
label { display: block; margin-top: 12px; font-size: 0.9em; }
select, input[type=number] { width: 100%; padding: 6px; margin-top: 4px; }
input[type=range] { width: 100%; }
.help { color: #6c757d; font-size: 0.8em; }
.columns { display: flex; gap: 32px; }
.columns > section { flex: 1; }
button { width: 100%; border-radius: 10px; height: 3em; background-color: #2e7d32; color: white; font-weight: bold; border: none; margin-top: 20px; cursor: pointer; }
button:hover { background-color: #1b5e20; }
.result-card { padding: 20px; border-radius: 15px; background-color: white; box-shadow: 0 4px 6px rgba(0,0,0,0.1); margin-top: 20px; }
.elevated { color: #b71c1c; }
.low { color: #1b5e20; }
.info { background: #e3f2fd; padding: 12px; border-radius: 8px; }
.error { background: #ffebee; padding: 12px; border-radius: 8px; }
progress { width: 100%; height: 1.2em; }
footer { margin-top: 40px; color: #6c757d; font-size: 0.8em; border-top: 1px solid #dee2e6; padding-top: 8px; }
"#;

/// Renders the full HTML document.
pub fn render_page(view: &PageView<'_>) -> String {
    let mut html = String::with_capacity(12 * 1024);
    html.push_str("<!DOCTYPE html>\n<html lang=\"pt-BR\">\n<head>\n<meta charset=\"utf-8\">\n");
    html.push_str("<meta name=\"viewport\" content=\"width=device-width, initial-scale=1\">\n");
    html.push_str("<title>Check-up de Saúde: Predisposição</title>\n<style>");
    html.push_str(STYLE);
    html.push_str("</style>\n</head>\n<body>\n<div class=\"layout\">\n");

    html.push_str("<aside>\n<h2>Sobre Você</h2>\n");
    render_form(&mut html, view.answers);
    html.push_str("</aside>\n");

    html.push_str("<main>\n<h1>🌱 Calculadora de Tendência à Saúde</h1>\n");
    html.push_str(
        "<h4>Entenda sua predisposição genética e comportamental para uma vida mais equilibrada.</h4>\n<hr>\n",
    );
    html.push_str("<div class=\"columns\">\n");
    render_how_it_works(&mut html);
    html.push_str("<section>\n<h3>🚀 Resultado da Análise</h3>\n");
    render_result(&mut html, &view.panel);
    html.push_str("</section>\n</div>\n");

    let _ = write!(
        html,
        "<footer>Trabalho de Pós-Graduação em Ciência de Dados &amp; Machine Learning | Modelo: {}</footer>\n",
        escape_html(view.model_name)
    );
    html.push_str("</main>\n</div>\n</body>\n</html>\n");
    html
}

fn render_form(html: &mut String, answers: &AnswerSheet) {
    html.push_str("<form method=\"post\" action=\"/analyze\">\n");

    html.push_str("<h3>👤 Perfil Básico</h3>\n");
    select_control::<Gender>(html, "gender", "Qual seu gênero?", &answers.gender);
    let _ = write!(
        html,
        "<label>Qual sua idade?<input type=\"number\" name=\"age\" min=\"14\" max=\"90\" step=\"1\" value=\"{}\" required></label>\n",
        answers.age
    );
    let _ = write!(
        html,
        "<label>Qual sua altura? (em metros)<input type=\"number\" name=\"height\" min=\"1.20\" max=\"2.20\" step=\"0.01\" value=\"{:.2}\" required></label>\n",
        answers.height
    );

    html.push_str("<h3>🧬 Histórico</h3>\n");
    select_control::<YesNo>(
        html,
        "family_history",
        "Existem casos de sobrepeso na sua família?",
        &answers.family_history,
    );

    html.push_str("<h3>🍎 Hábitos Alimentares</h3>\n");
    select_control::<YesNo>(
        html,
        "favc",
        "Você costuma comer alimentos muito calóricos com frequência?",
        &answers.favc,
    );
    scale_control(
        html,
        "fcvc",
        "Com que frequência você come vegetais nas refeições?",
        VegetableFrequency::options(),
        answers.fcvc,
        Some("1: Raramente, 2: Às vezes, 3: Sempre"),
    );
    scale_control(
        html,
        "ncp",
        "Quantas refeições principais você faz por dia?",
        MainMeals::options(),
        answers.ncp,
        None,
    );
    select_control::<SnackFrequency>(
        html,
        "caec",
        "Você costuma 'beliscar' entre as refeições?",
        &answers.caec,
    );
    scale_control(
        html,
        "ch2o",
        "Quantos litros de água você bebe por dia?",
        WaterIntake::options(),
        answers.ch2o,
        Some("1: Menos de 1L, 2: Entre 1L e 2L, 3: Mais de 2L"),
    );

    html.push_str("<h3>🏃 Estilo de Vida</h3>\n");
    scale_control(
        html,
        "faf",
        "Quantos dias por semana você pratica atividade física?",
        ActivityDays::options(),
        answers.faf,
        Some("0: Nenhum, 1: 1 a 2 dias, 2: 2 a 4 dias, 3: Mais de 4 dias"),
    );
    scale_control(
        html,
        "tue",
        "Quanto tempo você passa em frente a telas (celular/TV) por dia?",
        ScreenTime::options(),
        answers.tue,
        Some("0: 0-2h, 1: 3-5h, 2: Mais de 5h"),
    );
    select_control::<AlcoholFrequency>(
        html,
        "calc",
        "Com que frequência você consome álcool?",
        &answers.calc,
    );
    select_control::<YesNo>(html, "smoke", "Você fuma?", &answers.smoke);
    select_control::<YesNo>(
        html,
        "scc",
        "Você costuma contar as calorias do que come?",
        &answers.scc,
    );
    select_control::<Transport>(
        html,
        "mtrans",
        "Qual seu principal meio de transporte?",
        &answers.mtrans,
    );

    html.push_str("<button type=\"submit\">Analisar minha Predisposição</button>\n</form>\n");
}

fn select_control<C: AnswerChoice>(html: &mut String, name: &str, question: &str, selected: &str) {
    let _ = write!(html, "<label>{}<select name=\"{}\">", escape_html(question), name);
    for label in C::labels() {
        let mark = if label == selected { " selected" } else { "" };
        let _ = write!(
            html,
            "<option value=\"{0}\"{1}>{0}</option>",
            escape_html(label),
            mark
        );
    }
    html.push_str("</select></label>\n");
}

fn scale_control(
    html: &mut String,
    name: &str,
    question: &str,
    scale: RangeInclusive<u8>,
    value: i64,
    help: Option<&str>,
) {
    let (lo, hi) = (*scale.start(), *scale.end());
    let value = value.clamp(i64::from(lo), i64::from(hi));
    let _ = write!(
        html,
        "<label>{}<input type=\"range\" name=\"{}\" min=\"{}\" max=\"{}\" step=\"1\" value=\"{}\" list=\"{}-ticks\"></label>",
        escape_html(question),
        name,
        lo,
        hi,
        value,
        name
    );
    let _ = write!(html, "<datalist id=\"{}-ticks\">", name);
    for tick in scale {
        let _ = write!(html, "<option value=\"{0}\" label=\"{0}\"></option>", tick);
    }
    html.push_str("</datalist>\n");
    if let Some(help) = help {
        let _ = write!(html, "<div class=\"help\">{}</div>\n", escape_html(help));
    }
}

fn render_how_it_works(html: &mut String) {
    html.push_str(
        "<section>\n<h3>📋 Como funciona?</h3>\n\
         <p>Nosso algoritmo analisa seus hábitos diários e histórico familiar para identificar padrões que podem indicar uma \
         maior ou menor predisposição ao desenvolvimento de obesidade.</p>\n\
         <p><strong>Importante:</strong> Este modelo <strong>não utiliza seu peso atual</strong>, focando apenas em comportamento e genética.</p>\n\
         <hr>\n<h4>💡 Dicas para um bom resultado:</h4>\n<ul>\n\
         <li>Seja honesto sobre seus hábitos.</li>\n\
         <li>O resultado é uma estimativa baseada em dados estatísticos.</li>\n\
         <li>Consulte sempre um profissional de saúde.</li>\n</ul>\n</section>\n",
    );
}

fn render_result(html: &mut String, panel: &ResultPanel<'_>) {
    match panel {
        ResultPanel::Pending => html.push_str(
            "<div class=\"info\">Preencha os dados ao lado e clique no botão acima para ver o resultado.</div>\n",
        ),
        ResultPanel::Ready(assessment) => {
            let (class, icon) = if assessment.is_predisposed() {
                ("elevated", "⚠️")
            } else {
                ("low", "✅")
            };
            html.push_str("<div class=\"result-card\">\n<p><strong>Probabilidade Calculada:</strong></p>\n");
            let _ = write!(
                html,
                "<progress max=\"1\" value=\"{:.4}\">{}</progress>\n",
                assessment.probability.value(),
                assessment.probability
            );
            let _ = write!(
                html,
                "<h3 class=\"{}\">{} {}</h3>\n<p>{}</p>\n</div>\n",
                class,
                icon,
                escape_html(&assessment.headline()),
                escape_html(assessment.tendency.advice())
            );
        }
        ResultPanel::Invalid(message) => {
            let _ = write!(
                html,
                "<div class=\"error\">Resposta inválida: {}</div>\n",
                escape_html(message)
            );
        }
        ResultPanel::Failed => html.push_str(
            "<div class=\"error\">Não foi possível calcular o resultado. Tente novamente mais tarde.</div>\n",
        ),
    }
}

/// Escapes text for HTML element content and quoted attributes.
pub fn escape_html(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            _ => out.push(c),
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::foundation::Probability;

    fn render(panel: ResultPanel<'_>) -> String {
        let answers = AnswerSheet::default();
        render_page(&PageView {
            answers: &answers,
            panel,
            model_name: "XGBoost",
        })
    }

    #[test]
    fn pending_page_shows_instructions() {
        let html = render(ResultPanel::Pending);
        assert!(html.contains("Preencha os dados ao lado"));
        assert!(!html.contains("result-card\">"));
        assert!(html.contains("Modelo: XGBoost"));
    }

    #[test]
    fn form_has_one_control_per_field() {
        let html = render(ResultPanel::Pending);
        for name in [
            "gender", "age", "height", "family_history", "favc", "fcvc", "ncp", "caec", "smoke",
            "ch2o", "scc", "faf", "tue", "calc", "mtrans",
        ] {
            assert!(html.contains(&format!("name=\"{}\"", name)), "missing {}", name);
        }
        assert!(html.contains("Analisar minha Predisposição"));
    }

    #[test]
    fn defaults_are_preselected() {
        let html = render(ResultPanel::Pending);
        assert!(html.contains("<option value=\"Feminino\" selected>Feminino</option>"));
        assert!(html.contains("<option value=\"Transporte Público\" selected>"));
        assert!(html.contains("value=\"1.70\""));
    }

    #[test]
    fn sliders_offer_every_point_of_their_scale() {
        let html = render(ResultPanel::Pending);
        assert!(html.contains(
            "<datalist id=\"ncp-ticks\"><option value=\"1\" label=\"1\"></option>\
<option value=\"2\" label=\"2\"></option><option value=\"3\" label=\"3\"></option>\
<option value=\"4\" label=\"4\"></option></datalist>"
        ));
        assert!(html.contains("name=\"tue\" min=\"0\" max=\"2\""));
    }

    #[test]
    fn elevated_result_renders_warning_with_percentage() {
        let assessment = Assessment::from_probability(Probability::try_new(0.80).unwrap());
        let html = render(ResultPanel::Ready(&assessment));
        assert!(html.contains("Atenção: Tendência Elevada (80.0%)"));
        assert!(html.contains("class=\"elevated\""));
        assert!(html.contains("<progress max=\"1\" value=\"0.8000\">"));
        assert!(!html.contains("Preencha os dados"));
    }

    #[test]
    fn low_result_renders_success_with_percentage() {
        let assessment = Assessment::from_probability(Probability::try_new(0.10).unwrap());
        let html = render(ResultPanel::Ready(&assessment));
        assert!(html.contains("Ótimo: Tendência Baixa (10.0%)"));
        assert!(html.contains("class=\"low\""));
    }

    #[test]
    fn invalid_panel_escapes_message() {
        let html = render(ResultPanel::Invalid("<script>".to_string()));
        assert!(html.contains("&lt;script&gt;"));
        assert!(!html.contains("<script>"));
    }

    #[test]
    fn escape_html_handles_all_special_characters() {
        assert_eq!(escape_html(r#"<a href="x">&'"#), "&lt;a href=&quot;x&quot;&gt;&amp;&#39;");
    }
}
