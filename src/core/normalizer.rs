use std::collections::HashMap;

/// Thai province names as published in the upstream line list, paired with
/// the English spelling used by the province boundary GeoJSON.
pub const THAI_PROVINCES: &[(&str, &str)] = &[
    ("กรุงเทพมหานคร", "Bangkok"),
    ("เชียงใหม่", "Chiang Mai"),
    ("เชียงราย", "Chiang Rai"),
    ("ภูเก็ต", "Phuket"),
    ("นครราชสีมา", "Nakhon Ratchasima"),
    ("ขอนแก่น", "Khon Kaen"),
    ("อุดรธานี", "Udon Thani"),
    ("สุราษฎร์ธานี", "Surat Thani"),
    ("ตรัง", "Trang"),
    ("พังงา", "Phang Nga"),
    ("สตูล", "Satun"),
    ("กระบี่", "Krabi"),
    ("นครสวรรค์", "Nakhon Sawan"),
    ("สมุทรสาคร", "Samut Sakhon"),
    ("ปัตตานี", "Pattani"),
    ("เพชรบุรี", "Phetchaburi"),
    ("เลย", "Loei"),
    ("อุบลราชธานี", "Ubon Ratchathani"),
    ("บุรีรัมย์", "Buri Ram"),
    ("พัทลุง", "Phatthalung"),
    ("บึงกาฬ", "Bueng Kan"),
    ("ตาก", "Tak"),
    ("พิษณุโลก", "Phitsanulok"),
    ("ราชบุรี", "Ratchaburi"),
    ("สงขลา", "Songkhla"),
    ("ลำปาง", "Lampang"),
    ("ชลบุรี", "Chon Buri"),
    ("ยะลา", "Yala"),
    ("ฉะเชิงเทรา", "Chachoengsao"),
    ("ชัยภูมิ", "Chaiyaphum"),
    ("กาญจนบุรี", "Kanchanaburi"),
    ("สิงห์บุรี", "Sing Buri"),
    ("สระบุรี", "Saraburi"),
    ("สุโขทัย", "Sukhothai"),
    ("สุพรรณบุรี", "Suphan Buri"),
    ("ระยอง", "Rayong"),
    ("แม่ฮ่องสอน", "Mae Hong Son"),
    ("ลพบุรี", "Lop Buri"),
    ("สมุทรปราการ", "Samut Prakan"),
    ("นครศรีธรรมราช", "Nakhon Si Thammarat"),
    ("อุตรดิตถ์", "Uttaradit"),
    ("อุทัยธานี", "Uthai Thani"),
    ("พระนครศรีอยุธยา", "Phra Nakhon Si Ayutthaya"),
    ("ตราด", "Trat"),
    ("ศรีสะเกษ", "Si Sa Ket"),
    ("นครปฐม", "Nakhon Pathom"),
    ("แพร่", "Phrae"),
    ("ปราจีนบุรี", "Prachin Buri"),
    ("ร้อยเอ็ด", "Roi Et"),
    ("จันทบุรี", "Chanthaburi"),
    ("เพชรบูรณ์", "Phetchabun"),
    ("กำแพงเพชร", "Kamphaeng Phet"),
    ("อ่างทอง", "Ang Thong"),
    ("กาฬสินธุ์", "Kalasin"),
    ("ปทุมธานี", "Pathum Thani"),
    ("นครนายก", "Nakhon Nayok"),
    ("นนทบุรี", "Nonthaburi"),
    ("ประจวบคีรีขันธ์", "Prachuap Khiri Khan"),
    ("สระแก้ว", "Sa Kaeo"),
    ("ชุมพร", "Chumphon"),
    ("ระนอง", "Ranong"),
    ("หนองคาย", "Nong Khai"),
    ("สกลนคร", "Sakon Nakhon"),
    ("น่าน", "Nan"),
    ("มหาสารคาม", "Maha Sarakham"),
    ("หนองบัวลำภู", "Nong Bua Lamphu"),
    ("อำนาจเจริญ", "Amnat Charoen"),
    ("นครพนม", "Nakhon Phanom"),
    ("สมุทรสงคราม", "Samut Songkhram"),
    ("นราธิวาส", "Narathiwat"),
    ("ลำพูน", "Lamphun"),
    ("สุรินทร์", "Surin"),
    ("พิจิตร", "Phichit"),
    ("พะเยา", "Phayao"),
    ("มุกดาหาร", "Mukdahan"),
    ("ยโสธร", "Yasothon"),
    ("ชัยนาท", "Chai Nat"),
];

/// Read-only lookup from source-vocabulary region names to renderer names.
#[derive(Debug, Clone, Default)]
pub struct NameMap {
    names: HashMap<String, String>,
}

impl NameMap {
    pub fn new<I, K, V>(entries: I) -> Self
    where
        I: IntoIterator<Item = (K, V)>,
        K: Into<String>,
        V: Into<String>,
    {
        Self {
            names: entries
                .into_iter()
                .map(|(k, v)| (k.into(), v.into()))
                .collect(),
        }
    }

    pub fn thai_provinces() -> Self {
        Self::new(THAI_PROVINCES.iter().copied())
    }

    /// 修剪名稱(含空白與 BOM)後查表；查無對應時原樣回傳修剪後的名稱
    ///
    /// Unknown names pass through so they are still counted, even though the
    /// map has no shape for them. An empty result means the record cannot be
    /// assigned to any region.
    pub fn resolve<'a>(&'a self, raw_name: &'a str) -> &'a str {
        let trimmed = raw_name.trim_matches(|c: char| c.is_whitespace() || c == '\u{feff}');
        self.names
            .get(trimmed)
            .map(String::as_str)
            .unwrap_or(trimmed)
    }

    pub fn len(&self) -> usize {
        self.names.len()
    }

    pub fn is_empty(&self) -> bool {
        self.names.is_empty()
    }
}
