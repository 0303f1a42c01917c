//! Translation tables.
//!
//! Keys are dotted paths (`positions.senior`). Top-level keys are the labels
//! the header, list and form use directly.

use super::Language;

pub(super) fn catalog_for(lang: Language) -> &'static [(&'static str, &'static str)] {
    match lang {
        Language::Tr => TR,
        Language::En => EN,
    }
}

pub(super) fn lookup(lang: Language, key: &str) -> Option<&'static str> {
    catalog_for(lang)
        .iter()
        .find(|(k, _)| *k == key)
        .map(|&(_, v)| v)
        .filter(|v| !v.is_empty())
}

const TR: &[(&str, &str)] = &[
    ("employees", "Çalışanlar"),
    ("addNew", "Yeni Ekle"),
    ("employeeList", "Çalışan Listesi"),
    ("firstName", "Ad"),
    ("lastName", "Soyad"),
    ("dateOfEmployment", "İşe Giriş Tarihi"),
    ("dateOfBirth", "Doğum Tarihi"),
    ("phone", "Telefon"),
    ("email", "E-posta"),
    ("department", "Departman"),
    ("position", "Pozisyon"),
    ("actions", "İşlemler"),
    ("edit", "Düzenle"),
    ("delete", "Sil"),
    ("save", "Kaydet"),
    ("cancel", "İptal"),
    ("deleteConfirmation", "Silme Onayı"),
    ("deleteMessage", "Bu çalışanı silmek istediğinizden emin misiniz?"),
    ("confirm", "Onayla"),
    ("employeeAdded", "Çalışan başarıyla eklendi"),
    ("employeeUpdated", "Çalışan başarıyla güncellendi"),
    ("employeeDeleted", "Çalışan başarıyla silindi"),
    ("selectPosition", "Pozisyon Seçiniz"),
    ("addEmployee", "Çalışan Ekle"),
    ("editEmployee", "Çalışanı Düzenle"),
    ("positions.junior", "Junior"),
    ("positions.mid", "Mid"),
    ("positions.senior", "Senior"),
    ("view.table", "Tablo"),
    ("view.grid", "Kart"),
    ("validation.required", "Bu alan zorunludur"),
    (
        "validation.phone",
        "Geçerli formatlar: 05357456609, 0535 745 6609, 5357456609, 535 745 6609",
    ),
    ("validation.email", "Geçerli bir e-posta adresi giriniz"),
    ("validation.position", "Geçerli bir pozisyon seçiniz"),
    ("language.tr", "Türkçe"),
    ("language.en", "English"),
];

const EN: &[(&str, &str)] = &[
    ("employees", "Employees"),
    ("addNew", "Add New"),
    ("employeeList", "Employee List"),
    ("firstName", "First Name"),
    ("lastName", "Last Name"),
    ("dateOfEmployment", "Date of Employment"),
    ("dateOfBirth", "Date of Birth"),
    ("phone", "Phone"),
    ("email", "Email"),
    ("department", "Department"),
    ("position", "Position"),
    ("actions", "Actions"),
    ("edit", "Edit"),
    ("delete", "Delete"),
    ("save", "Save"),
    ("cancel", "Cancel"),
    ("deleteConfirmation", "Delete Confirmation"),
    ("deleteMessage", "Are you sure you want to delete this employee?"),
    ("confirm", "Confirm"),
    ("employeeAdded", "Employee added successfully"),
    ("employeeUpdated", "Employee updated successfully"),
    ("employeeDeleted", "Employee deleted successfully"),
    ("selectPosition", "Select Position"),
    ("addEmployee", "Add Employee"),
    ("editEmployee", "Edit Employee"),
    ("positions.junior", "Junior"),
    ("positions.mid", "Mid"),
    ("positions.senior", "Senior"),
    ("view.table", "Table"),
    ("view.grid", "Grid"),
    ("validation.required", "This field is required"),
    (
        "validation.phone",
        "Valid formats: 05357456609, 0535 745 6609, 5357456609, 535 745 6609",
    ),
    ("validation.email", "Enter a valid email address"),
    ("validation.position", "Select a valid position"),
    ("language.tr", "Türkçe"),
    ("language.en", "English"),
];

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_catalogs_have_same_keys() {
        let tr: Vec<_> = TR.iter().map(|(k, _)| *k).collect();
        let en: Vec<_> = EN.iter().map(|(k, _)| *k).collect();
        assert_eq!(tr, en);
    }

    #[test]
    fn test_no_duplicate_keys() {
        for lang in Language::ALL {
            let table = catalog_for(lang);
            for (i, (key, _)) in table.iter().enumerate() {
                assert!(
                    !table[i + 1..].iter().any(|(k, _)| k == key),
                    "duplicate key {key} in {lang}"
                );
            }
        }
    }
}
