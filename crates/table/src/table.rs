/// One (display name, institutional code) pair.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct DepartmentEntry<'a> {
    pub name: &'a str,
    pub code: &'a str,
}

impl<'a> DepartmentEntry<'a> {
    pub const fn new(name: &'a str, code: &'a str) -> Self {
        Self { name, code }
    }
}

pub const DEPARTMENT_COUNT: usize = 35;

/// Source order as maintained by hand; `sort` decides the emitted order.
pub const DEPARTMENTS: [DepartmentEntry<'static>; DEPARTMENT_COUNT] = [
    DepartmentEntry::new("Central", "%23SPLUS2"),
    DepartmentEntry::new("Chem & EE", "MSC-CEE"),
    DepartmentEntry::new("Civ Eng", "MSC-CIVE"),
    DepartmentEntry::new("E & EE", "MSC-EEE"),
    DepartmentEntry::new("MMME", "MSC-MMME"),
    DepartmentEntry::new("App Math", "MSC-AMATH"),
    DepartmentEntry::new("Biosci", "MSC-BIOSCI"),
    DepartmentEntry::new("Comp Sci", "MSC-CS"),
    DepartmentEntry::new("Pharmacy", "MSC-PHARM"),
    DepartmentEntry::new("App Psych", "MSC-APPPSY"),
    DepartmentEntry::new("NUBS", "MSC-NUBS"),
    DepartmentEntry::new("Education", "MSC-ED"),
    DepartmentEntry::new("Law", "005011"),
    DepartmentEntry::new("C of EL", "MSC-CEL"),
    DepartmentEntry::new("No Subject", "005014"),
    DepartmentEntry::new("Psychology", "MSC-PSGY"),
    DepartmentEntry::new("MLC", "MSC-MLC"),
    DepartmentEntry::new("English Language Education", "005017"),
    DepartmentEntry::new("Eng (Fn)", "MSC-ENGF"),
    DepartmentEntry::new("Sci (F)", "MSC-SCIF"),
    DepartmentEntry::new("Economics", "MSC-ECON"),
    DepartmentEntry::new("Bus & M F", "MSC-BMF"),
    DepartmentEntry::new("Art & Ed F", "MSC-AEF"),
    DepartmentEntry::new("Pol, H, IR", "MSC-PHIR"),
    DepartmentEntry::new("SoE&GS", "MSC-GEOG"),
    DepartmentEntry::new("GSD (MSC)", "MSC-GSD"),
    DepartmentEntry::new("American and Canadian Studies", "005024"),
    DepartmentEntry::new("Computer Science - (Foundation)", "005025"),
    DepartmentEntry::new("Biosciences - (Foundation)", "005027"),
    DepartmentEntry::new("Biom Sci", "MSC-BIOMED"),
    DepartmentEntry::new("Eng Fac", "MSC-ENGFAC"),
    DepartmentEntry::new("UNMC", "UNMC"),
    DepartmentEntry::new("Science", "MFY-SCI"),
    DepartmentEntry::new("English", "MSC-ENGL"),
    DepartmentEntry::new("GSD (MDD)", "MDD-GSD"),
];
