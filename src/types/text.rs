/// Lower-cases `value` and folds accented Latin letters to their base letter.
pub fn fold_text(value: &str) -> String {
    value.to_lowercase().chars().map(fold_char).collect()
}

/// Normalizes a column header for alias matching.
///
/// `" Descrição (R$) "` becomes `"descricao_r"`: folded, with every run of
/// non-alphanumeric characters collapsed to one underscore and none at the ends.
pub fn normalize_header(header: &str) -> String {
    let folded = fold_text(header);
    let mut normalized = String::with_capacity(folded.len());
    let mut separator_pending = false;

    for c in folded.chars() {
        if c.is_alphanumeric() {
            if separator_pending && !normalized.is_empty() {
                normalized.push('_');
            }
            separator_pending = false;
            normalized.push(c);
        } else {
            separator_pending = true;
        }
    }

    normalized
}

fn fold_char(c: char) -> char {
    match c {
        'á' | 'à' | 'ã' | 'â' | 'ä' | 'å' => 'a',
        'é' | 'è' | 'ê' | 'ë' => 'e',
        'í' | 'ì' | 'î' | 'ï' => 'i',
        'ó' | 'ò' | 'õ' | 'ô' | 'ö' => 'o',
        'ú' | 'ù' | 'û' | 'ü' => 'u',
        'ç' => 'c',
        'ñ' => 'n',
        'ý' | 'ÿ' => 'y',
        other => other
    }
}
