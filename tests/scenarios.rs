//! End-to-end checks on complete relvars.

use normalization_core::{
    attribute_set, bcnf_violations, candidate_keys, closure, fourth_nf_violations, is_key,
    is_relvar_in_4nf, is_relvar_in_bcnf, is_superkey, AttributeSet, FunctionalDependency,
    NormalForm, Relvar,
};
use rstest::{fixture, rstest};
use std::collections::BTreeSet;

fn set(names: &[&str]) -> AttributeSet {
    attribute_set(names.iter().copied()).unwrap()
}

fn build(heading: &[&str], fds: &[&str], mvds: &[&str]) -> Relvar {
    Relvar::with_dependencies(
        set(heading),
        fds.iter().map(|e| e.parse().unwrap()),
        mvds.iter().map(|e| e.parse().unwrap()),
    )
    .unwrap()
}

const INVOICE_HEADING: [&str; 14] = [
    "Nombre", "RFC", "CP", "RegimenF", "RegimenC", "CFDI", "FolioF", "MontoF", "IVA", "FechaF",
    "Producto", "FolioP", "MontoP", "FechaP",
];

#[fixture]
fn invoice() -> Relvar {
    build(
        &INVOICE_HEADING,
        &[
            "{FolioP} -> {MontoP, FechaP}",
            "{FolioP} -> {FolioF}",
            "{FolioF} -> {RFC}",
            "{RFC} -> {Nombre, CP}",
            "{FolioF} -> {MontoF, IVA, FechaF}",
            "{FolioF} -> {RegimenF, CFDI}",
        ],
        &[],
    )
}

#[test]
fn test_contact_table_is_in_bcnf_and_4nf() {
    let r = build(
        &["ID", "Nombre", "Correo", "Telefono"],
        &["{ID} -> {Nombre, Correo, Telefono}"],
        &[],
    );
    assert!(is_relvar_in_bcnf(&r));
    assert!(is_relvar_in_4nf(&r));
    assert_eq!(r.normal_form(), Some(NormalForm::FourthNf));
}

#[test]
fn test_grades_table_is_bcnf_but_not_4nf() {
    let r = build(
        &["Estudiante", "Clase", "Calificacion", "Libro"],
        &["{Estudiante, Clase} -> {Calificacion}", "{Estudiante, Clase} -> {Libro}"],
        &["{Clase} ->-> {Libro}"],
    );
    assert!(is_relvar_in_bcnf(&r));
    assert!(!is_relvar_in_4nf(&r));
    assert_eq!(r.normal_form(), Some(NormalForm::Bcnf));

    let violations = fourth_nf_violations(&r);
    assert_eq!(violations.len(), 1);
    assert_eq!(violations[0].normal_form, NormalForm::FourthNf);
    assert_eq!(violations[0].dependency.to_string(), "{Clase} ->-> {Libro}");
    assert_eq!(violations[0].determinant_closure, set(&["Clase"]));
}

#[test]
fn test_single_dependency_closure() {
    let fd: FunctionalDependency = "{A} -> {B}".parse().unwrap();
    let fds = BTreeSet::from([fd]);
    assert_eq!(closure(&set(&["A"]), &fds), set(&["A", "B"]));
    assert!(!is_superkey(&set(&["A"]), &set(&["A", "B", "C"]), &fds));
}

#[rstest]
#[case(&["FolioP", "Producto", "RegimenC"], true, true)]
#[case(&["FolioP", "Producto", "RegimenC", "RFC"], true, false)]
#[case(&["FolioP", "Producto"], false, false)]
#[case(&["RFC"], false, false)]
fn test_invoice_keys(
    invoice: Relvar,
    #[case] attributes: &[&str],
    #[case] superkey: bool,
    #[case] key: bool,
) {
    let attributes = set(attributes);
    assert_eq!(invoice.is_superkey(&attributes), superkey);
    assert_eq!(invoice.is_key(&attributes), key);
    assert_eq!(
        is_key(&attributes, invoice.heading(), invoice.functional_dependencies()),
        key
    );
}

#[rstest]
fn test_invoice_candidate_keys(invoice: Relvar) {
    let keys = candidate_keys(invoice.heading(), invoice.functional_dependencies());
    assert_eq!(keys, vec![set(&["FolioP", "Producto", "RegimenC"])]);
}

#[rstest]
fn test_invoice_is_not_in_bcnf(invoice: Relvar) {
    assert!(!invoice.is_in_bcnf());
    assert!(!invoice.is_in_4nf());

    // Every dependency here has a single-attribute determinant that is not a key.
    let offenders: BTreeSet<String> = bcnf_violations(&invoice)
        .into_iter()
        .map(|v| v.dependency.to_string())
        .collect();
    assert_eq!(offenders.len(), invoice.functional_dependencies().len());
}

#[rstest]
fn test_invoice_with_regime_mvd(invoice: Relvar) {
    let mut r = invoice;
    r.add_functional_dependency("{MontoF} -> {IVA}".parse().unwrap()).unwrap();
    r.add_multivalued_dependency("{RFC} ->-> {RegimenC}".parse().unwrap()).unwrap();

    assert_eq!(r.multivalued_dependencies().len(), 1);
    assert!(r.is_key(&set(&["FolioP", "Producto", "RegimenC"])));

    let violations = fourth_nf_violations(&r);
    assert!(violations
        .iter()
        .any(|v| v.normal_form == NormalForm::FourthNf
            && v.dependency.to_string() == "{RFC} ->-> {RegimenC}"));
}

#[rstest]
fn test_closure_properties_on_invoice(invoice: Relvar) {
    let fds = invoice.functional_dependencies();
    for name in INVOICE_HEADING {
        let start = set(&[name]);
        let reach = closure(&start, fds);
        assert!(reach.is_superset(&start));
        assert_eq!(closure(&reach, fds), reach);
        assert_eq!(is_superkey(&start, invoice.heading(), fds), reach == *invoice.heading());
    }
}
