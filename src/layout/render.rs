//! HTML rendering of the layout tree.

use super::{Component, Style, PAYLOAD_SLIDER_ID, PIE_CHART_ID, SCATTER_CHART_ID, SITE_DROPDOWN_ID};
use crate::models::DropdownOption;

const PLOTLY_JS: &str = "https://cdn.plot.ly/plotly-2.35.2.min.js";

/// Client glue: fetch a figure from the chart endpoints whenever a watched
/// control changes and hand it to plotly.js.
const SCRIPT: &str = r#"
(function () {
  const ids = window.DASHBOARD_IDS;
  const dropdown = document.getElementById(ids.dropdown);
  const low = document.getElementById(ids.slider + "-low");
  const high = document.getElementById(ids.slider + "-high");
  const readout = document.getElementById(ids.slider + "-value");

  async function draw(target, path, params) {
    const response = await fetch(path + "?" + new URLSearchParams(params));
    if (!response.ok) {
      console.error("chart request failed", path, response.status);
      return;
    }
    const figure = await response.json();
    Plotly.react(target, figure.data, figure.layout);
  }

  function updatePie() {
    draw(ids.pie, "/api/v1/charts/pie", { site: dropdown.value });
  }

  // Range inputs clamp their value to min/max and the step, so the declared
  // initial range is sent as-is until a handle moves.
  let range = ids.sliderValue;

  function updateScatter() {
    const params = { site: dropdown.value };
    if (range) {
      params.low = range[0];
      params.high = range[1];
      readout.textContent = range[0] + " - " + range[1];
    }
    draw(ids.scatter, "/api/v1/charts/scatter", params);
  }

  function moveHandles() {
    range = [low.value, high.value];
    updateScatter();
  }

  dropdown.addEventListener("change", function () {
    updatePie();
    updateScatter();
  });
  low.addEventListener("change", moveHandles);
  high.addEventListener("change", moveHandles);

  updatePie();
  updateScatter();
})();
"#;

/// Render the layout as a complete HTML document.
pub fn render_page(root: &Component) -> String {
    let ids = serde_json::json!({
        "dropdown": SITE_DROPDOWN_ID,
        "pie": PIE_CHART_ID,
        "slider": PAYLOAD_SLIDER_ID,
        "scatter": SCATTER_CHART_ID,
        "sliderValue": slider_value(root),
    });

    let mut output = String::new();
    output.push_str("<!DOCTYPE html>\n<html lang=\"en\">\n<head>\n");
    output.push_str("<meta charset=\"utf-8\">\n");
    output.push_str(&format!("<title>{}</title>\n", escape(super::DASHBOARD_TITLE)));
    output.push_str(&format!("<script src=\"{}\"></script>\n", PLOTLY_JS));
    output.push_str("</head>\n<body>\n");
    render_component(&mut output, root);
    output.push_str(&format!("<script>window.DASHBOARD_IDS = {};</script>\n", ids));
    output.push_str("<script>");
    output.push_str(SCRIPT);
    output.push_str("</script>\n</body>\n</html>\n");
    output
}

/// Initial `[low, high]` of the payload slider, if the layout has one.
fn slider_value(root: &Component) -> Option<[f64; 2]> {
    match root.find(PAYLOAD_SLIDER_ID) {
        Some(Component::RangeSlider { value, .. }) => Some(*value),
        _ => None,
    }
}

fn render_component(output: &mut String, component: &Component) {
    match component {
        Component::Div { children } => {
            output.push_str("<div>\n");
            for child in children {
                render_component(output, child);
            }
            output.push_str("</div>\n");
        }
        Component::Heading { text, style } => {
            output.push_str(&format!(
                "<h1 style=\"{}\">{}</h1>\n",
                css(style),
                escape(text)
            ));
        }
        Component::Paragraph { text } => {
            output.push_str(&format!("<p>{}</p>\n", escape(text)));
        }
        Component::Break => output.push_str("<br>\n"),
        Component::Dropdown {
            id,
            options,
            value,
            placeholder,
            searchable,
        } => render_dropdown(output, id, options, value, placeholder, *searchable),
        Component::RangeSlider {
            id,
            min,
            max,
            step,
            marks,
            value,
        } => {
            let id = escape(id);
            output.push_str(&format!("<div id=\"{}\">\n", id));
            output.push_str(&format!("<datalist id=\"{}-marks\">\n", id));
            for mark in marks {
                output.push_str(&format!(
                    "<option value=\"{}\" label=\"{}\"></option>\n",
                    mark.value,
                    escape(&mark.label)
                ));
            }
            output.push_str("</datalist>\n");
            for (suffix, handle) in [("low", value[0]), ("high", value[1])] {
                output.push_str(&format!(
                    "<input type=\"range\" id=\"{id}-{suffix}\" min=\"{min}\" max=\"{max}\" \
                     step=\"{step}\" value=\"{handle}\" list=\"{id}-marks\">\n"
                ));
            }
            output.push_str(&format!(
                "<span id=\"{}-value\">{} - {}</span>\n",
                id, value[0], value[1]
            ));
            output.push_str("</div>\n");
        }
        Component::Graph { id } => {
            output.push_str(&format!("<div id=\"{}\" class=\"graph\"></div>\n", escape(id)));
        }
    }
}

/// Searchable dropdowns render as a text input backed by a datalist, the
/// rest as a plain `<select>`. Both expose the chosen value as `.value`.
fn render_dropdown(
    output: &mut String,
    id: &str,
    options: &[DropdownOption],
    value: &str,
    placeholder: &str,
    searchable: bool,
) {
    let id = escape(id);
    let placeholder = escape(placeholder);

    if searchable {
        output.push_str(&format!(
            "<input type=\"search\" id=\"{id}\" list=\"{id}-options\" value=\"{}\" \
             placeholder=\"{placeholder}\" aria-label=\"{placeholder}\">\n",
            escape(value)
        ));
        output.push_str(&format!("<datalist id=\"{}-options\">\n", id));
        for option in options {
            output.push_str(&format!(
                "<option value=\"{}\" label=\"{}\"></option>\n",
                escape(&option.value),
                escape(&option.label)
            ));
        }
        output.push_str("</datalist>\n");
        return;
    }

    output.push_str(&format!(
        "<select id=\"{id}\" aria-label=\"{placeholder}\">\n"
    ));
    for option in options {
        let selected = if option.value == value { " selected" } else { "" };
        output.push_str(&format!(
            "<option value=\"{}\"{}>{}</option>\n",
            escape(&option.value),
            selected,
            escape(&option.label)
        ));
    }
    output.push_str("</select>\n");
}

fn css(style: &Style) -> String {
    let mut rules = Vec::new();
    if let Some(align) = &style.text_align {
        rules.push(format!("text-align: {}", align));
    }
    if let Some(color) = &style.color {
        rules.push(format!("color: {}", color));
    }
    if let Some(size) = style.font_size {
        rules.push(format!("font-size: {}px", size));
    }
    escape(&rules.join("; "))
}

fn escape(text: &str) -> String {
    let mut escaped = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '&' => escaped.push_str("&amp;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            '"' => escaped.push_str("&quot;"),
            '\'' => escaped.push_str("&#39;"),
            _ => escaped.push(c),
        }
    }
    escaped
}
