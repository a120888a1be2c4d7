use crate::domain::Gender::{Female, Male};
use crate::domain::NameRecord;

/// Traditional Ghanaian given names. Repeated rows are kept as they appear in
/// the source table.
pub static GHANAIAN_NAMES: &[NameRecord] = &[
    // Akan day names
    NameRecord::new("Kwame", "Born on Saturday", "Akan", Male),
    NameRecord::new("Kwesi", "Born on Sunday", "Akan", Male),
    NameRecord::new("Kwadwo", "Born on Monday", "Akan", Male),
    NameRecord::new("Kwabena", "Born on Tuesday", "Akan", Male),
    NameRecord::new("Kwaku", "Born on Wednesday", "Akan", Male),
    NameRecord::new("Yaw", "Born on Thursday", "Akan", Male),
    NameRecord::new("Kofi", "Born on Friday", "Akan", Male),
    NameRecord::new("Adwoa", "Born on Monday", "Akan", Female),
    NameRecord::new("Abena", "Born on Tuesday", "Akan", Female),
    NameRecord::new("Akua", "Born on Wednesday", "Akan", Female),
    NameRecord::new("Yaa", "Born on Thursday", "Akan", Female),
    NameRecord::new("Afua", "Born on Friday", "Akan", Female),
    NameRecord::new("Ama", "Born on Saturday", "Akan", Female),
    NameRecord::new("Akosua", "Born on Sunday", "Akan", Female),
    // Akan family names
    NameRecord::new("Nana", "Chief/King", "Akan", Male),
    NameRecord::new("Osei", "Noble", "Akan", Male),
    NameRecord::new("Boateng", "Warrior", "Akan", Male),
    NameRecord::new("Mensah", "Third child", "Akan", Male),
    NameRecord::new("Addo", "King of the road", "Akan", Male),
    NameRecord::new("Owusu", "Born on Sunday", "Akan", Male),
    NameRecord::new("Sarpong", "Warrior", "Akan", Male),
    NameRecord::new("Darko", "Born on Friday", "Akan", Male),
    NameRecord::new("Asante", "Warrior", "Akan", Male),
    NameRecord::new("Opoku", "Gift from God", "Akan", Male),
    NameRecord::new("Agyemang", "Brave warrior", "Akan", Male),
    NameRecord::new("Kufuor", "Born on Friday", "Akan", Male),
    NameRecord::new("Annan", "Fourth child", "Akan", Male),
    NameRecord::new("Kufuor", "Born on Friday", "Akan", Male),
    // Akan day names, repeated
    NameRecord::new("Adwoa", "Born on Monday", "Akan", Female),
    NameRecord::new("Abena", "Born on Tuesday", "Akan", Female),
    NameRecord::new("Akua", "Born on Wednesday", "Akan", Female),
    NameRecord::new("Yaa", "Born on Thursday", "Akan", Female),
    NameRecord::new("Afua", "Born on Friday", "Akan", Female),
    NameRecord::new("Ama", "Born on Saturday", "Akan", Female),
    NameRecord::new("Akosua", "Born on Sunday", "Akan", Female),
    NameRecord::new("Adwoa", "Born on Monday", "Akan", Female),
    NameRecord::new("Abena", "Born on Tuesday", "Akan", Female),
    NameRecord::new("Akua", "Born on Wednesday", "Akan", Female),
    NameRecord::new("Yaa", "Born on Thursday", "Akan", Female),
    NameRecord::new("Afua", "Born on Friday", "Akan", Female),
    NameRecord::new("Ama", "Born on Saturday", "Akan", Female),
    NameRecord::new("Akosua", "Born on Sunday", "Akan", Female),
    // Ewe names
    NameRecord::new("Kofi", "Born on Friday", "Ewe", Male),
    NameRecord::new("Kodjo", "Born on Monday", "Ewe", Male),
    NameRecord::new("Komla", "Born on Tuesday", "Ewe", Male),
    NameRecord::new("Koku", "Born on Wednesday", "Ewe", Male),
    NameRecord::new("Yawo", "Born on Thursday", "Ewe", Male),
    NameRecord::new("Kwami", "Born on Saturday", "Ewe", Male),
    NameRecord::new("Kwasi", "Born on Sunday", "Ewe", Male),
    NameRecord::new("Adzo", "Born on Monday", "Ewe", Female),
    NameRecord::new("Abla", "Born on Tuesday", "Ewe", Female),
    NameRecord::new("Aku", "Born on Wednesday", "Ewe", Female),
    NameRecord::new("Ya", "Born on Thursday", "Ewe", Female),
    NameRecord::new("Afi", "Born on Friday", "Ewe", Female),
    NameRecord::new("Ama", "Born on Saturday", "Ewe", Female),
    NameRecord::new("Akos", "Born on Sunday", "Ewe", Female),
    // Dagomba names
    NameRecord::new("Alhassan", "Lion", "Dagomba", Male),
    NameRecord::new("Ibrahim", "Father of many", "Dagomba", Male),
    NameRecord::new("Musa", "Drawn from water", "Dagomba", Male),
    NameRecord::new("Yakubu", "Supplanter", "Dagomba", Male),
    NameRecord::new("Abdul", "Servant of God", "Dagomba", Male),
    NameRecord::new("Fatima", "Daughter of the Prophet", "Dagomba", Female),
    NameRecord::new("Aisha", "Living", "Dagomba", Female),
    NameRecord::new("Hajara", "Forsaken", "Dagomba", Female),
    NameRecord::new("Zainab", "Fragrant flower", "Dagomba", Female),
    NameRecord::new("Rahma", "Mercy", "Dagomba", Female),
    // Ga names
    NameRecord::new("Nii", "Chief", "Ga", Male),
    NameRecord::new("Naa", "Chief", "Ga", Female),
    NameRecord::new("Tetteh", "Third child", "Ga", Male),
    NameRecord::new("Tettey", "Third child", "Ga", Female),
    NameRecord::new("Lartey", "Fourth child", "Ga", Male),
    NameRecord::new("Lartei", "Fourth child", "Ga", Female),
    NameRecord::new("Bortey", "Fifth child", "Ga", Male),
    NameRecord::new("Bortei", "Fifth child", "Ga", Female),
    NameRecord::new("Adjetey", "Sixth child", "Ga", Male),
    NameRecord::new("Adjei", "Sixth child", "Ga", Female),
    NameRecord::new("Adjei", "Seventh child", "Ga", Male),
    NameRecord::new("Adjei", "Seventh child", "Ga", Female),
    NameRecord::new("Adjei", "Eighth child", "Ga", Male),
    NameRecord::new("Adjei", "Eighth child", "Ga", Female),
    NameRecord::new("Adjei", "Ninth child", "Ga", Male),
    NameRecord::new("Adjei", "Ninth child", "Ga", Female),
    NameRecord::new("Adjei", "Tenth child", "Ga", Male),
    NameRecord::new("Adjei", "Tenth child", "Ga", Female),
    // Fante names
    NameRecord::new("Kwame", "Born on Saturday", "Fante", Male),
    NameRecord::new("Kwesi", "Born on Sunday", "Fante", Male),
    NameRecord::new("Kwadwo", "Born on Monday", "Fante", Male),
    NameRecord::new("Kwabena", "Born on Tuesday", "Fante", Male),
    NameRecord::new("Kwaku", "Born on Wednesday", "Fante", Male),
    NameRecord::new("Yaw", "Born on Thursday", "Fante", Male),
    NameRecord::new("Kofi", "Born on Friday", "Fante", Male),
    NameRecord::new("Adwoa", "Born on Monday", "Fante", Female),
    NameRecord::new("Abena", "Born on Tuesday", "Fante", Female),
    NameRecord::new("Akua", "Born on Wednesday", "Fante", Female),
    NameRecord::new("Yaa", "Born on Thursday", "Fante", Female),
    NameRecord::new("Afua", "Born on Friday", "Fante", Female),
    NameRecord::new("Ama", "Born on Saturday", "Fante", Female),
    NameRecord::new("Akosua", "Born on Sunday", "Fante", Female),
];
