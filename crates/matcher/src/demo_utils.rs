//! Synthetic `PATDOC` documents for tests, benches and demos.

/// Grant-style document with optional CPC (`B511`/`B516`) and USPC
/// (`B521`/`B522`) fields. `None` leaves the field element out entirely; an
/// anchor with no fields is still emitted so only the field is missing.
pub fn patdoc(
    cpc_primary: Option<&str>,
    cpc_secondary: Option<&str>,
    uspc_primary: Option<&str>,
    uspc_secondary: Option<&str>,
) -> String {
    let mut doc = String::from(
        "<!DOCTYPE PATDOC SYSTEM \"ST32-US-Grant-025xml.dtd\">\n\
         <PATDOC DTD=\"2.5\" STATUS=\"BUILD 20010803\">\n\
         <SDOBI>\n<B100><B110><DNUM><PDAT>06000000</PDAT></DNUM></B110></B100>\n<B500>\n",
    );

    doc.push_str("<B510>");
    push_field(&mut doc, "B511", cpc_primary);
    push_field(&mut doc, "B516", cpc_secondary);
    doc.push_str("</B510>\n");

    doc.push_str("<B520>");
    push_field(&mut doc, "B521", uspc_primary);
    push_field(&mut doc, "B522", uspc_secondary);
    doc.push_str("</B520>\n");

    doc.push_str("<B540><STEXT><PDAT>Synthetic title</PDAT></STEXT></B540>\n");
    doc.push_str("</B500>\n</SDOBI>\n<SDOAB><BTEXT><PARA><PTEXT><PDAT>Abstract text.</PDAT></PTEXT></PARA></BTEXT></SDOAB>\n</PATDOC>\n");
    doc
}

/// Document carrying only CPC fields.
pub fn cpc_document(primary: Option<&str>, secondary: Option<&str>) -> String {
    patdoc(primary, secondary, None, None)
}

/// Document carrying only USPC fields.
pub fn uspc_document(primary: Option<&str>, secondary: Option<&str>) -> String {
    patdoc(None, None, primary, secondary)
}

/// Grant-sized document: one set of fields followed by `paragraphs` of
/// description text, for throughput benches.
pub fn large_patdoc(cpc_primary: &str, uspc_primary: &str, paragraphs: usize) -> String {
    let mut doc = patdoc(Some(cpc_primary), None, Some(uspc_primary), None);
    let body_start = doc.rfind("</PATDOC>").unwrap_or(doc.len());
    let mut body = String::from("<SDODE><DETDESC><BTEXT>\n");
    for i in 0..paragraphs {
        body.push_str(&format!(
            "<PARA ID=\"P-{i:05}\"><PTEXT><PDAT>Paragraph {i} describes the claimed apparatus in detail.</PDAT></PTEXT></PARA>\n"
        ));
    }
    body.push_str("</BTEXT></DETDESC></SDODE>\n");
    doc.insert_str(body_start, &body);
    doc
}

fn push_field(doc: &mut String, element: &str, value: Option<&str>) {
    if let Some(value) = value {
        doc.push_str(&format!("<{element}><PDAT>{value}</PDAT></{element}>"));
    }
}
