//! Dictionary-backed Indonesian stemmer.
//!
//! Affixes are stripped in the usual confix order: inflectional particles, possessive
//! pronouns, derivational suffixes and then up to three derivational prefixes. The root
//! dictionary is consulted after every step and a word is only changed when a root is found.

use {
    std::{collections::HashSet, fs::read_to_string, path::Path},
    tracing::debug,
    crate::error::Result,
};

const PARTICLES: &[&str] = &["lah", "kah", "tah", "pun"];
const POSSESSIVES: &[&str] = &["nya", "ku", "mu"];
const DERIVATIONAL_SUFFIXES: &[&str] = &["kan", "an", "i"];
const MAX_PREFIXES: usize = 3;

const ROOT_WORDS: &[&str] = &[
    "ada", "adil", "admin", "aduh", "ajar", "akses", "akun", "aman", "ambil", "anjlok",
    "antar", "api", "aplikasi", "asal", "asli", "atur", "awal", "bagi", "bagus", "baik",
    "baca", "balas", "banding", "bantu", "banyak", "baru", "batal", "bayar", "beban", "bebas",
    "beda", "beli", "benar", "berat", "berhenti", "berita", "besar", "biaya", "bikin", "bingung",
    "bisa", "bobrok", "bohong", "bonus", "buat", "buka", "bunga", "buruk", "butuh", "cair",
    "cara", "cek", "cepat", "cinta", "coba", "cocok", "cuan", "cukup", "cuma", "daftar",
    "dana", "dapat", "data", "datang", "deposit", "dompet", "dukung", "dulu", "edukasi", "emas",
    "error", "fitur", "gagal", "gampang", "ganggu", "ganti", "gaji", "gambar", "gerak", "grafik",
    "guna", "hapus", "harap", "harga", "hasil", "hemat", "hilang", "hitung", "hubung", "informasi",
    "ingat", "ingin", "instal", "investasi", "investor", "jadi", "jalan", "jaga", "jalur", "jamin",
    "jangka", "jaring", "jawab", "jelas", "jelek", "jual", "jumlah", "kabar", "kacau", "kali",
    "kalah", "kasih", "keluh", "keluar", "kecewa", "kecil", "kembang", "kenal", "kerja", "kirim",
    "komisi", "koneksi", "kurang", "laku", "lama", "lambat", "lancar", "langkah", "lapor", "layan",
    "lebih", "lelet", "lemot", "lengkap", "lihat", "lindung", "login", "lunas", "maaf", "macet",
    "main", "maju", "makan", "malas", "mampu", "mantap", "masalah", "masuk", "mati", "milik",
    "minat", "minta", "modal", "mudah", "muat", "mulai", "murah", "naik", "nama", "nilai",
    "nyaman", "nyata", "obligasi", "olah", "order", "pakai", "paham", "pantau", "pasar", "peduli",
    "pelajar", "pemula", "pencet", "pengaruh", "perintah", "perlu", "pilih", "pindah", "pinjam", "portofolio",
    "proses", "puas", "pulih", "pusing", "putus", "rapi", "rasa", "ramah", "rekomendasi", "reksadana",
    "respon", "ribet", "rugi", "rusak", "saham", "sabar", "saldo", "salah", "sama", "sambung",
    "sangat", "sapu", "saran", "sedia", "sekali", "selesai", "semangat", "senang", "sering", "server",
    "setor", "siap", "sibuk", "simpan", "sinyal", "suka", "sulit", "sumber", "syarat", "tahan",
    "tahu", "tambah", "tampil", "tanam", "tanggap", "tanya", "tarik", "tawar", "tekan", "teliti",
    "teman", "temu", "tenang", "tepat", "terang", "terima", "tertarik", "tidak", "tingkat", "tolong",
    "top", "transaksi", "trading", "transfer", "tuju", "tunggu", "tunjuk", "turun", "tutup", "uang",
    "ubah", "ulang", "ulas", "untung", "update", "upgrade", "urus", "usaha", "verifikasi", "waktu",
];

/// Indonesian stemmer backed by a root word dictionary.
#[derive(Debug, Clone)]
pub struct Stemmer {
    dictionary: HashSet<String>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum PrefixFamily {
    Di,
    Ke,
    Se,
    Be,
    Te,
    Me,
    Pe,
}

impl Default for Stemmer {
    fn default() -> Self {
        Self::new()
    }
}

impl Stemmer {
    pub fn new() -> Self {
        Self::from_words(ROOT_WORDS.iter().copied())
    }

    pub fn from_words<'a>(words: impl IntoIterator<Item = &'a str>) -> Self {
        Self {
            dictionary: words.into_iter().map(|w| w.trim().to_lowercase()).filter(|w| !w.is_empty()).collect(),
        }
    }

    /// Adds roots from a word-per-line file to the built-in dictionary.
    pub fn with_dictionary_file(mut self, path: &Path) -> Result<Self> {
        let contents = read_to_string(path)?;
        let before = self.dictionary.len();
        self.extend(contents.lines());
        debug!("loaded {} root words from {}", self.dictionary.len() - before, path.display());
        Ok(self)
    }

    pub fn extend<'a>(&mut self, words: impl IntoIterator<Item = &'a str>) {
        for word in words {
            let word = word.trim().to_lowercase();
            if !word.is_empty() {
                self.dictionary.insert(word);
            }
        }
    }

    pub fn is_root(&self, word: &str) -> bool {
        self.dictionary.contains(word)
    }

    pub fn stem_text(&self, text: &str) -> String {
        text.split_whitespace()
            .map(|word| self.stem_word(word))
            .collect::<Vec<_>>()
            .join(" ")
    }

    pub fn stem_word(&self, word: &str) -> String {
        if word.len() <= 3 || self.is_root(word) {
            return word.to_owned();
        }

        self.find_root(word).unwrap_or_else(|| word.to_owned())
    }

    fn find_root(&self, word: &str) -> Option<String> {
        let stages = suffix_stages(word);

        for stage in &stages {
            if self.is_root(&stage.word) {
                return Some(stage.word.clone());
            }
        }

        // deepest suffix removal first, then give suffixes back one at a time
        for stage in stages.iter().rev() {
            if let Some(root) = self.strip_prefixes(&stage.word, stage.derivational, &[], 0) {
                return Some(root);
            }
        }

        None
    }

    fn strip_prefixes(&self, word: &str, suffix: Option<&str>, removed: &[PrefixFamily], depth: usize) -> Option<String> {
        if depth >= MAX_PREFIXES {
            return None;
        }

        for (family, candidate) in prefix_candidates(word) {
            if removed.contains(&family) {
                continue;
            }
            if depth == 0 && is_disallowed_confix(family, suffix) {
                continue;
            }
            if candidate.len() < 2 {
                continue;
            }
            if self.is_root(&candidate) {
                return Some(candidate);
            }

            let mut removed = removed.to_vec();
            removed.push(family);
            if let Some(root) = self.strip_prefixes(&candidate, suffix, &removed, depth + 1) {
                return Some(root);
            }
        }

        None
    }
}

struct SuffixStage {
    word: String,
    derivational: Option<&'static str>,
}

fn suffix_stages(word: &str) -> Vec<SuffixStage> {
    let mut stages = vec![SuffixStage { word: word.to_owned(), derivational: None }];

    let mut current = word.to_owned();
    for group in [PARTICLES, POSSESSIVES] {
        if let Some(stripped) = strip_suffix(&current, group) {
            current = stripped;
            stages.push(SuffixStage { word: current.clone(), derivational: None });
        }
    }

    for suffix in DERIVATIONAL_SUFFIXES {
        if let Some(stripped) = current.strip_suffix(suffix).filter(|rest| rest.len() >= 2) {
            stages.push(SuffixStage { word: stripped.to_owned(), derivational: Some(*suffix) });
            // "-kan" may also be a root ending in "k" followed by "-an"
            if *suffix == "kan" {
                stages.push(SuffixStage { word: format!("{}k", stripped), derivational: Some("an") });
            }
            break;
        }
    }

    stages
}

fn strip_suffix(word: &str, suffixes: &[&str]) -> Option<String> {
    suffixes.iter()
        .find_map(|suffix| word.strip_suffix(suffix))
        .filter(|rest| rest.len() >= 2)
        .map(|rest| rest.to_owned())
}

fn is_vowel(c: char) -> bool {
    matches!(c, 'a' | 'e' | 'i' | 'o' | 'u')
}

fn starts_with_vowel(word: &str) -> bool {
    word.chars().next().map(is_vowel).unwrap_or(false)
}

/// Candidate stems after removing one prefix, with nasal recoding for me(N)- and pe(N)-.
fn prefix_candidates(word: &str) -> Vec<(PrefixFamily, String)> {
    use PrefixFamily::*;

    let nasal = |family: PrefixFamily, rest: &str, recode: &[&str]| -> Vec<(PrefixFamily, String)> {
        if starts_with_vowel(rest) {
            recode.iter().map(|initial| (family, format!("{}{}", initial, rest))).collect()
        } else {
            vec![(family, rest.to_owned())]
        }
    };

    if let Some(rest) = word.strip_prefix("di") {
        return vec![(Di, rest.to_owned())];
    }
    if let Some(rest) = word.strip_prefix("ke") {
        return vec![(Ke, rest.to_owned())];
    }
    if let Some(rest) = word.strip_prefix("se") {
        return vec![(Se, rest.to_owned())];
    }

    if let Some(rest) = word.strip_prefix("meng") {
        return nasal(Me, rest, &["", "k"]);
    }
    if let Some(rest) = word.strip_prefix("meny") {
        return vec![(Me, format!("s{}", rest))];
    }
    if let Some(rest) = word.strip_prefix("mem") {
        return nasal(Me, rest, &["p", "m"]);
    }
    if let Some(rest) = word.strip_prefix("men") {
        return nasal(Me, rest, &["t", "n"]);
    }
    if let Some(rest) = word.strip_prefix("me") {
        return vec![(Me, rest.to_owned())];
    }

    if let Some(rest) = word.strip_prefix("peng") {
        return nasal(Pe, rest, &["", "k"]);
    }
    if let Some(rest) = word.strip_prefix("peny") {
        return vec![(Pe, format!("s{}", rest))];
    }
    if let Some(rest) = word.strip_prefix("pem") {
        return nasal(Pe, rest, &["p", "m"]);
    }
    if let Some(rest) = word.strip_prefix("pen") {
        return nasal(Pe, rest, &["t", "n"]);
    }
    if let Some(rest) = word.strip_prefix("per") {
        return nasal(Pe, rest, &["", "r"]);
    }
    if let Some(rest) = word.strip_prefix("pe") {
        return vec![(Pe, rest.to_owned())];
    }

    if let Some(rest) = word.strip_prefix("ber") {
        let mut candidates = nasal(Be, rest, &["", "r"]);
        candidates.push((Be, format!("r{}", rest)));
        candidates.dedup();
        return candidates;
    }
    if let Some(rest) = word.strip_prefix("be") {
        return vec![(Be, rest.to_owned())];
    }
    if let Some(rest) = word.strip_prefix("ter") {
        let mut candidates = nasal(Te, rest, &["", "r"]);
        candidates.push((Te, format!("r{}", rest)));
        candidates.dedup();
        return candidates;
    }
    if let Some(rest) = word.strip_prefix("te") {
        return vec![(Te, rest.to_owned())];
    }

    Vec::new()
}

fn is_disallowed_confix(prefix: PrefixFamily, suffix: Option<&str>) -> bool {
    use PrefixFamily::*;

    matches!(
        (prefix, suffix),
        (Be, Some("i"))
            | (Di, Some("an"))
            | (Ke, Some("i"))
            | (Ke, Some("kan"))
            | (Me, Some("an"))
            | (Se, Some("i"))
            | (Se, Some("kan"))
            | (Te, Some("an"))
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    fn stem(word: &str) -> String {
        Stemmer::new().stem_word(word)
    }

    #[test]
    fn roots_and_short_words_are_kept() {
        assert_eq!(stem("bagus"), "bagus");
        assert_eq!(stem("aplikasi"), "aplikasi");
        assert_eq!(stem("oke"), "oke");
    }

    #[test]
    fn strips_suffixes() {
        assert_eq!(stem("aplikasinya"), "aplikasi");
        assert_eq!(stem("bagusnya"), "bagus");
        assert_eq!(stem("mudahlah"), "mudah");
    }

    #[test]
    fn strips_prefixes_with_recoding() {
        assert_eq!(stem("dipakai"), "pakai");
        assert_eq!(stem("membantu"), "bantu");
        assert_eq!(stem("menarik"), "tarik");
        assert_eq!(stem("terbaik"), "baik");
        assert_eq!(stem("menyapu"), "sapu");
        assert_eq!(stem("memakai"), "pakai");
    }

    #[test]
    fn strips_confixes() {
        assert_eq!(stem("menggunakan"), "guna");
        assert_eq!(stem("keuntungan"), "untung");
        assert_eq!(stem("memuaskan"), "puas");
        assert_eq!(stem("pembelian"), "beli");
        assert_eq!(stem("berinvestasi"), "investasi");
        assert_eq!(stem("kekecewaan"), "kecewa");
    }

    #[test]
    fn unknown_words_are_left_alone() {
        assert_eq!(stem("qwertyuiop"), "qwertyuiop");
        assert_eq!(stem("mengqwerty"), "mengqwerty");
    }

    #[test]
    fn stems_every_word_of_a_text() {
        assert_eq!(Stemmer::new().stem_text("aplikasi  dipakai lancar"), "aplikasi pakai lancar");
    }

    #[test]
    fn dictionary_can_be_extended() {
        let mut stemmer = Stemmer::from_words(["bagus"]);
        assert_eq!(stemmer.stem_word("dipakai"), "dipakai");

        stemmer.extend(["pakai", "  "]);
        assert_eq!(stemmer.stem_word("dipakai"), "pakai");
    }

    #[test]
    fn dictionary_file_is_loaded() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        std::io::Write::write_all(&mut file, b"reksa\nlabuh\n").unwrap();

        let stemmer = Stemmer::new().with_dictionary_file(file.path()).unwrap();

        assert!(stemmer.is_root("labuh"));
        assert_eq!(stemmer.stem_word("berlabuh"), "labuh");
    }
}
