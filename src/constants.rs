//! Application constants and configuration

pub const APP_NAME: &str = "Subscription Tracker";
pub const APP_VERSION: &str = env!("CARGO_PKG_VERSION");

/// Days before the end date during which a subscription counts as nearing expiry
pub const NEAR_EXPIRY_DAYS: i64 = 7;

/// Date format used by the date inputs and the table
pub const DATE_FORMAT: &str = "%Y-%m-%d";

/// Status labels need a repaint even when nobody touches the window
pub const STATUS_REFRESH_SECS: u64 = 60;

// Static UI strings (Arabic)
pub const TITLE: &str = "نظام إدارة الاشتراكات";
pub const FORM_HEADING: &str = "إضافة مشترك جديد";
pub const LABEL_FIRST_NAME: &str = "الاسم";
pub const LABEL_LAST_NAME: &str = "اللقب";
pub const LABEL_PHONE: &str = "رقم الهاتف";
pub const LABEL_AMOUNT: &str = "المبلغ";
pub const LABEL_START_DATE: &str = "تاريخ بداية الاشتراك";
pub const LABEL_END_DATE: &str = "تاريخ نهاية الاشتراك";
pub const SUBMIT_LABEL: &str = "إضافة مشترك";
pub const FILTER_HEADING: &str = "الفلترة";
pub const FILTER_EXPIRED_ONLY: &str = "عرض المشتركين منتهي الصلاحية فقط";
pub const LIST_HEADING: &str = "قائمة المشتركين";
pub const COL_FULL_NAME: &str = "الاسم الكامل";
pub const COL_PHONE: &str = "رقم الهاتف";
pub const COL_AMOUNT: &str = "المبلغ";
pub const COL_START_DATE: &str = "تاريخ البداية";
pub const COL_END_DATE: &str = "تاريخ النهاية";
pub const COL_STATUS: &str = "الحالة";
pub const STATUS_EXPIRED: &str = "منتهي الصلاحية";
pub const STATUS_NEARING: &str = "يقترب موعد الانتهاء";
pub const STATUS_ACTIVE: &str = "نشط";
