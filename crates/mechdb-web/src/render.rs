//! Display formatting for database entries.
//!
//! All numeric formatting happens here rather than in the page markup:
//! LaTeX scientific notation, `%g`-style shortest float form, structure and
//! reaction markup, literature reference munging, and the per-variant
//! parameter tables shown on entry pages.

use mechdb_chem::{Arrhenius, KineticsData, Reaction, Structure, ThermoData};
use once_cell::sync::Lazy;
use regex::Regex;

static WHITESPACE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"\s+").expect("whitespace pattern compiles"));

/// Shortest-form float formatting equivalent to the C `%g` conversion with
/// six significant digits.
pub fn fmt_g(value: f64) -> String {
    if value == 0.0 {
        return "0".to_string();
    }
    if !value.is_finite() {
        return value.to_string();
    }

    let mut exp = value.abs().log10().floor() as i32;
    if exp < -4 || exp > 5 {
        let mut mantissa = value / 10f64.powi(exp);
        // Rounding at six significant digits can push the mantissa to 10.
        if mantissa.abs() >= 10.0 {
            mantissa /= 10.0;
            exp += 1;
        }
        let sign = if exp < 0 { '-' } else { '+' };
        format!("{}e{}{:02}", trim_zeros(&format!("{:.5}", mantissa)), sign, exp.abs())
    } else {
        let decimals = (5 - exp).max(0) as usize;
        trim_zeros(&format!("{value:.decimals$}"))
    }
}

fn trim_zeros(s: &str) -> String {
    if s.contains('.') {
        s.trim_end_matches('0').trim_end_matches('.').to_string()
    } else {
        s.to_string()
    }
}

/// LaTeX-formatted scientific notation, e.g. `2.5 \times 10^{-3}`.
/// The mantissa is normalized into [1, 10) magnitude; zero prints as `0`.
pub fn latex_scientific(value: f64) -> String {
    if value == 0.0 {
        return "0".to_string();
    }
    let mut exp = value.abs().log10().trunc() as i32;
    let mut mant = value / 10f64.powi(exp);
    if mant.abs() < 1.0 {
        mant *= 10.0;
        exp -= 1;
    }
    format!("{} \\times 10^{{{}}}", fmt_g(mant), exp)
}

/// HTML markup for a structural item.
///
/// Molecules and patterns both render as `<img>` tags pointing at the
/// external drawing endpoints, with the adjacency list packed into the URL:
/// newlines become `;`, remaining whitespace runs become `%20`.
pub fn structure_markup(item: &Structure) -> String {
    let adjlist = item.adjacency_list().replace('\n', ";");
    let encoded = WHITESPACE.replace_all(&adjlist, "%20");
    if item.is_pattern() {
        format!("<img src=\"/pattern/{encoded}\"/>")
    } else {
        format!("<img src=\"/molecule/{encoded}\"/>")
    }
}

/// Reactant or product side of a reaction, joined with ` + `.
pub fn structure_list_markup(structures: &[Structure]) -> String {
    structures
        .iter()
        .map(structure_markup)
        .collect::<Vec<_>>()
        .join(" + ")
}

/// Equilibrium arrow for reversible reactions, plain arrow otherwise.
pub fn reaction_arrow(reaction: &Reaction) -> &'static str {
    if reaction.reversible {
        "&hArr;"
    } else {
        "&rarr;"
    }
}

/// Protect a leading author initial from LaTeX sentence spacing:
/// `A. Smith` becomes `A.\ Smith`.
pub fn format_reference(reference: &str) -> String {
    let bytes = reference.as_bytes();
    if bytes.len() >= 3 && bytes[1] == b'.' && bytes[2] == b' ' {
        format!("{}\\ {}", &reference[0..2], &reference[2..])
    } else {
        reference.to_string()
    }
}

/// One group of formatted parameters on an entry page.
#[derive(Debug, Clone, PartialEq)]
pub struct ParameterSection {
    pub heading: Option<String>,
    pub rows: Vec<(String, String)>,
}

impl ParameterSection {
    fn plain(rows: Vec<(String, String)>) -> Self {
        Self { heading: None, rows }
    }

    fn titled(heading: impl Into<String>, rows: Vec<(String, String)>) -> Self {
        Self {
            heading: Some(heading.into()),
            rows,
        }
    }
}

/// Formatted parameter tables for a thermodynamic model.
pub fn thermo_sections(data: &ThermoData) -> Vec<ParameterSection> {
    match data {
        ThermoData::GroupAdditivity {
            h298,
            s298,
            tdata,
            cpdata,
            tmin,
            tmax,
        } => {
            let mut rows = vec![
                ("H(298 K)".to_string(), format!("{:.2} kJ/mol", h298 / 1000.0)),
                ("S(298 K)".to_string(), format!("{s298:.2} J/(mol K)")),
                ("Tmin".to_string(), format!("{} K", fmt_g(*tmin))),
                ("Tmax".to_string(), format!("{} K", fmt_g(*tmax))),
            ];
            for (t, cp) in tdata.iter().zip(cpdata.iter()) {
                rows.push((
                    format!("Cp({} K)", fmt_g(*t)),
                    format!("{cp:.2} J/(mol K)"),
                ));
            }
            vec![ParameterSection::plain(rows)]
        }
        ThermoData::Wilhoit {
            cp0,
            cp_inf,
            a0,
            a1,
            a2,
            a3,
            h0,
            s0,
            b,
            tmin,
            tmax,
        } => vec![ParameterSection::plain(vec![
            ("Cp(0)".to_string(), format!("{cp0:.2} J/(mol K)")),
            ("Cp(inf)".to_string(), format!("{cp_inf:.2} J/(mol K)")),
            ("a0".to_string(), latex_scientific(*a0)),
            ("a1".to_string(), latex_scientific(*a1)),
            ("a2".to_string(), latex_scientific(*a2)),
            ("a3".to_string(), latex_scientific(*a3)),
            ("H0".to_string(), format!("{:.2} kJ/mol", h0 / 1000.0)),
            ("S0".to_string(), format!("{s0:.2} J/(mol K)")),
            ("B".to_string(), format!("{b:.2} K")),
            ("Tmin".to_string(), format!("{} K", fmt_g(*tmin))),
            ("Tmax".to_string(), format!("{} K", fmt_g(*tmax))),
        ])],
        ThermoData::Nasa { polynomials } => polynomials
            .iter()
            .enumerate()
            .map(|(i, poly)| {
                let mut rows: Vec<(String, String)> = poly
                    .coefficients()
                    .iter()
                    .enumerate()
                    .map(|(j, c)| (format!("c{}", j as i32 - 2), latex_scientific(*c)))
                    .collect();
                rows.push(("Tmin".to_string(), format!("{} K", fmt_g(poly.tmin))));
                rows.push(("Tmax".to_string(), format!("{} K", fmt_g(poly.tmax))));
                ParameterSection::titled(format!("Polynomial {}", i + 1), rows)
            })
            .collect(),
        ThermoData::Link { target } => vec![ParameterSection::plain(vec![(
            "Target entry".to_string(),
            target.to_string(),
        )])],
    }
}

fn arrhenius_rows(arr: &Arrhenius) -> Vec<(String, String)> {
    vec![
        ("A".to_string(), latex_scientific(arr.a)),
        ("n".to_string(), format!("{:.2}", arr.n)),
        ("Ea".to_string(), format!("{:.2} kJ/mol", arr.ea / 1000.0)),
        ("T0".to_string(), format!("{} K", fmt_g(arr.t0))),
        ("Tmin".to_string(), format!("{} K", fmt_g(arr.tmin))),
        ("Tmax".to_string(), format!("{} K", fmt_g(arr.tmax))),
    ]
}

/// Formatted parameter tables for a kinetics model.
pub fn kinetics_sections(data: &KineticsData) -> Vec<ParameterSection> {
    match data {
        KineticsData::Arrhenius(arr) => {
            vec![ParameterSection::plain(arrhenius_rows(arr))]
        }
        KineticsData::ArrheniusEp { a, n, alpha, e0 } => {
            vec![ParameterSection::plain(vec![
                ("A".to_string(), latex_scientific(*a)),
                ("n".to_string(), format!("{n:.2}")),
                ("alpha".to_string(), format!("{alpha:.2}")),
                ("E0".to_string(), format!("{:.2} kJ/mol", e0 / 1000.0)),
            ])]
        }
        KineticsData::MultiArrhenius { arrhenius } => arrhenius
            .iter()
            .enumerate()
            .map(|(i, arr)| {
                ParameterSection::titled(format!("Arrhenius {}", i + 1), arrhenius_rows(arr))
            })
            .collect(),
        KineticsData::PDepArrhenius {
            pressures,
            arrhenius,
        } => pressures
            .iter()
            .zip(arrhenius.iter())
            .map(|(p, arr)| {
                ParameterSection::titled(
                    format!("P = {} Pa", fmt_g(*p)),
                    arrhenius_rows(arr),
                )
            })
            .collect(),
        KineticsData::Chebyshev {
            coeffs,
            tmin,
            tmax,
            pmin,
            pmax,
        } => {
            let mut rows = Vec::new();
            for (i, row) in coeffs.iter().enumerate() {
                for (j, c) in row.iter().enumerate() {
                    rows.push((format!("C({i},{j})"), latex_scientific(*c)));
                }
            }
            rows.push(("Tmin".to_string(), format!("{} K", fmt_g(*tmin))));
            rows.push(("Tmax".to_string(), format!("{} K", fmt_g(*tmax))));
            rows.push(("Pmin".to_string(), format!("{} Pa", fmt_g(*pmin))));
            rows.push(("Pmax".to_string(), format!("{} Pa", fmt_g(*pmax))));
            vec![ParameterSection::plain(rows)]
        }
        KineticsData::Troe {
            arrhenius_low,
            arrhenius_high,
            alpha,
            t3,
            t1,
            t2,
        } => {
            let mut falloff = vec![
                ("alpha".to_string(), format!("{alpha:.2}")),
                ("T3".to_string(), format!("{} K", fmt_g(*t3))),
                ("T1".to_string(), format!("{} K", fmt_g(*t1))),
            ];
            if let Some(t2) = t2 {
                falloff.push(("T2".to_string(), format!("{} K", fmt_g(*t2))));
            }
            vec![
                ParameterSection::titled("High-pressure limit", arrhenius_rows(arrhenius_high)),
                ParameterSection::titled("Low-pressure limit", arrhenius_rows(arrhenius_low)),
                ParameterSection::titled("Falloff", falloff),
            ]
        }
        KineticsData::Lindemann {
            arrhenius_low,
            arrhenius_high,
        } => vec![
            ParameterSection::titled("High-pressure limit", arrhenius_rows(arrhenius_high)),
            ParameterSection::titled("Low-pressure limit", arrhenius_rows(arrhenius_low)),
        ],
        KineticsData::ThirdBody {
            arrhenius_low,
            efficiencies,
        } => {
            let mut sections = vec![ParameterSection::titled(
                "Low-pressure limit",
                arrhenius_rows(arrhenius_low),
            )];
            if !efficiencies.is_empty() {
                sections.push(ParameterSection::titled(
                    "Collider efficiencies",
                    efficiencies
                        .iter()
                        .map(|(species, eff)| (species.clone(), format!("{eff:.2}")))
                        .collect(),
                ));
            }
            sections
        }
        KineticsData::Link { target } => vec![ParameterSection::plain(vec![(
            "Target entry".to_string(),
            target.to_string(),
        )])],
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use mechdb_chem::NasaPolynomial;

    #[test]
    fn test_fmt_g_plain_and_scientific() {
        assert_eq!(fmt_g(0.0), "0");
        assert_eq!(fmt_g(300.0), "300");
        assert_eq!(fmt_g(1.5), "1.5");
        assert_eq!(fmt_g(0.0001), "0.0001");
        assert_eq!(fmt_g(100000.0), "100000");
        assert_eq!(fmt_g(1000000.0), "1e+06");
        assert_eq!(fmt_g(0.000025), "2.5e-05");
        assert_eq!(fmt_g(-450.0), "-450");
    }

    #[test]
    fn test_latex_scientific() {
        assert_eq!(latex_scientific(0.0), "0");
        assert_eq!(latex_scientific(100000.0), "1 \\times 10^{5}");
        assert_eq!(latex_scientific(0.0025), "2.5 \\times 10^{-3}");
        assert_eq!(latex_scientific(-6.02e23), "-6.02 \\times 10^{23}");
        assert_eq!(latex_scientific(5.0), "5 \\times 10^{0}");
    }

    #[test]
    fn test_structure_markup_encodes_adjacency_list() {
        let mol = Structure::Molecule {
            adjacency_list: "1 C 0 {2,S}\n2 O 0 {1,S}".to_string(),
        };
        let markup = structure_markup(&mol);
        assert!(markup.starts_with("<img src=\"/molecule/"));
        assert!(markup.contains("1%20C%200%20{2,S};2%20O%200%20{1,S}"));

        let pattern = Structure::Pattern {
            adjacency_list: "1 * R!H 0".to_string(),
        };
        assert!(structure_markup(&pattern).starts_with("<img src=\"/pattern/"));
    }

    #[test]
    fn test_reaction_arrow() {
        let mol = Structure::Molecule {
            adjacency_list: "1 H 0".to_string(),
        };
        let mut rxn = Reaction {
            reactants: vec![mol.clone()],
            products: vec![mol],
            reversible: true,
        };
        assert_eq!(reaction_arrow(&rxn), "&hArr;");
        rxn.reversible = false;
        assert_eq!(reaction_arrow(&rxn), "&rarr;");
    }

    #[test]
    fn test_format_reference_munges_initial() {
        assert_eq!(
            format_reference("S. Smith, J. Phys. Chem. 1994."),
            "S.\\  Smith, J. Phys. Chem. 1994."
        );
        // No leading initial: unchanged.
        assert_eq!(format_reference("Smith et al. 1994."), "Smith et al. 1994.");
        assert_eq!(format_reference(""), "");
    }

    #[test]
    fn test_group_additivity_rows() {
        let data = ThermoData::GroupAdditivity {
            h298: -84_680.0,
            s298: 229.6,
            tdata: vec![300.0],
            cpdata: vec![52.49],
            tmin: 300.0,
            tmax: 1500.0,
        };
        let sections = thermo_sections(&data);
        assert_eq!(sections.len(), 1);
        let rows = &sections[0].rows;
        assert_eq!(rows[0], ("H(298 K)".to_string(), "-84.68 kJ/mol".to_string()));
        assert_eq!(rows[1].1, "229.60 J/(mol K)");
        assert_eq!(rows[4], ("Cp(300 K)".to_string(), "52.49 J/(mol K)".to_string()));
    }

    #[test]
    fn test_nasa_sections_per_polynomial() {
        let poly = NasaPolynomial {
            cm2: 0.0,
            cm1: 0.0,
            c0: 3.5,
            c1: -0.0002,
            c2: 0.0,
            c3: 0.0,
            c4: 0.0,
            c5: -30_000.0,
            c6: 5.5,
            tmin: 300.0,
            tmax: 1000.0,
        };
        let data = ThermoData::Nasa {
            polynomials: vec![poly.clone(), poly],
        };
        let sections = thermo_sections(&data);
        assert_eq!(sections.len(), 2);
        assert_eq!(sections[0].heading.as_deref(), Some("Polynomial 1"));
        // c-2 through c6, then Tmin and Tmax.
        assert_eq!(sections[0].rows.len(), 11);
        assert_eq!(sections[0].rows[0].0, "c-2");
        assert_eq!(sections[0].rows[2], ("c0".to_string(), "3.5 \\times 10^{0}".to_string()));
    }

    #[test]
    fn test_arrhenius_rows_units() {
        let data = KineticsData::Arrhenius(Arrhenius {
            a: 1.0e13,
            n: 0.0,
            ea: 150_000.0,
            t0: 1.0,
            tmin: 300.0,
            tmax: 2000.0,
        });
        let sections = kinetics_sections(&data);
        let rows = &sections[0].rows;
        assert_eq!(rows[0].1, "1 \\times 10^{13}");
        assert_eq!(rows[2].1, "150.00 kJ/mol");
        assert_eq!(rows[3].1, "1 K");
    }

    #[test]
    fn test_troe_sections() {
        let arr = Arrhenius {
            a: 1.0e10,
            n: 0.5,
            ea: 8_000.0,
            t0: 1.0,
            tmin: 300.0,
            tmax: 2000.0,
        };
        let data = KineticsData::Troe {
            arrhenius_low: arr.clone(),
            arrhenius_high: arr,
            alpha: 0.62,
            t3: 100.0,
            t1: 1500.0,
            t2: None,
        };
        let sections = kinetics_sections(&data);
        assert_eq!(sections.len(), 3);
        assert_eq!(sections[0].heading.as_deref(), Some("High-pressure limit"));
        assert_eq!(sections[2].rows.len(), 3, "T2 row omitted when absent");
    }
}
