//! Bilingual page copy.

use crate::models::language::Language;
use crate::validate::{FieldError, Problem};

pub struct Strings {
    pub site_name: &'static str,
    pub nav_home: &'static str,
    pub nav_book: &'static str,
    pub nav_notify: &'static str,
    pub currency: &'static str,
    pub back_home: &'static str,
    pub errors_heading: &'static str,

    pub home_title: &'static str,
    pub home_subtitle: &'static str,
    pub pricing_title: &'static str,
    pub pricing_subtitle: &'static str,
    pub per_session: &'static str,
    pub sessions: &'static str,
    pub book_now: &'static str,
    pub notify_cta: &'static str,

    pub booking_title: &'static str,
    pub booking_subtitle: &'static str,
    pub step_personal: &'static str,
    pub step_session: &'static str,
    pub step_payment: &'static str,
    pub full_name: &'static str,
    pub email: &'static str,
    pub phone: &'static str,
    pub address: &'static str,
    pub city: &'static str,
    pub preferred_date: &'static str,
    pub preferred_time: &'static str,
    pub select_time: &'static str,
    pub session_type: &'static str,
    pub special_requests: &'static str,
    pub next: &'static str,
    pub back: &'static str,
    pub start_over: &'static str,
    pub order_summary: &'static str,
    pub summary_package: &'static str,
    pub summary_date: &'static str,
    pub summary_time: &'static str,
    pub summary_total: &'static str,
    pub payment_method: &'static str,
    pub card: &'static str,
    pub card_hint: &'static str,
    pub wallet: &'static str,
    pub wallet_hint: &'static str,
    pub wallet_phone: &'static str,
    pub confirm_pay: &'static str,
    pub secure_note: &'static str,
    pub payment_unavailable: &'static str,
    pub wallet_unavailable: &'static str,
    pub payment_failed: &'static str,
    pub too_many_attempts: &'static str,
    pub card_page_title: &'static str,
    pub card_page_hint: &'static str,
    pub wallet_pending_title: &'static str,
    pub wallet_pending_message: &'static str,

    pub notify_title: &'static str,
    pub notify_subtitle: &'static str,
    pub name: &'static str,
    pub name_placeholder: &'static str,
    pub email_placeholder: &'static str,
    pub phone_placeholder: &'static str,
    pub notify_submit: &'static str,
    pub notify_success_title: &'static str,
    pub notify_success_message: &'static str,
    pub notify_features: [&'static str; 4],

    pub not_found_title: &'static str,
    pub not_found_message: &'static str,

    msg_required: &'static str,
    msg_too_long: &'static str,
    msg_invalid_email: &'static str,
    msg_invalid_phone: &'static str,
    msg_invalid_date: &'static str,
    msg_date_in_past: &'static str,
    msg_invalid_time: &'static str,
    msg_invalid_wallet_phone: &'static str,
    msg_invalid_choice: &'static str,
}

static EN: Strings = Strings {
    site_name: "zeeprivate",
    nav_home: "Home",
    nav_book: "Book a Session",
    nav_notify: "Mobile App",
    currency: "EGP",
    back_home: "Back to Home",
    errors_heading: "Please fix the following:",

    home_title: "Private Boxing Training at Your Door",
    home_subtitle: "Certified coaches, flexible schedules, real results.",
    pricing_title: "Flexible Pricing Plans",
    pricing_subtitle: "Choose the package that fits your boxing journey",
    per_session: "per session",
    sessions: "sessions",
    book_now: "Book Now",
    notify_cta: "Get notified when our app launches",

    booking_title: "Book Your Training Session",
    booking_subtitle: "Fill in your details and choose your payment method",
    step_personal: "Personal Information",
    step_session: "Session Details",
    step_payment: "Payment",
    full_name: "Full Name",
    email: "Email Address",
    phone: "Phone Number",
    address: "Home Address",
    city: "City",
    preferred_date: "Preferred Date",
    preferred_time: "Preferred Time",
    select_time: "Select time",
    session_type: "Session Package",
    special_requests: "Special Requests (Optional)",
    next: "Next Step",
    back: "Back",
    start_over: "Start over",
    order_summary: "Order Summary",
    summary_package: "Package",
    summary_date: "Date",
    summary_time: "Time",
    summary_total: "Total",
    payment_method: "Choose Payment Method",
    card: "Visa/Mastercard",
    card_hint: "Pay securely with your card",
    wallet: "Vodafone Cash",
    wallet_hint: "Pay with your mobile wallet",
    wallet_phone: "Wallet phone number",
    confirm_pay: "Confirm & Pay",
    secure_note: "Your payment is secure and encrypted. Powered by Paymob.",
    payment_unavailable: "Online payment is currently unavailable. Please contact us to complete your booking.",
    wallet_unavailable: "Wallet payments are currently unavailable. Please pay by card.",
    payment_failed: "Your payment could not be started. Please try again.",
    too_many_attempts: "Too many payment attempts. Please try again later.",
    card_page_title: "Complete Your Payment",
    card_page_hint: "Enter your card details in the secure form below.",
    wallet_pending_title: "Check Your Phone",
    wallet_pending_message: "Follow the instructions sent to your wallet number to approve the payment.",

    notify_title: "Get Notified When Our App Launches",
    notify_subtitle: "Be the first to know when the zeeprivate mobile app is available",
    name: "Your Name",
    name_placeholder: "Enter your name",
    email_placeholder: "you@example.com",
    phone_placeholder: "+20 xxx xxx xxxx",
    notify_submit: "Notify Me",
    notify_success_title: "You're on the list!",
    notify_success_message: "We'll notify you as soon as our mobile app is ready. Get ready for professional boxing training on the go!",
    notify_features: [
        "Book coaches instantly from your phone",
        "Real-time coach tracking",
        "In-app messaging with your trainer",
        "Exclusive mobile-only discounts",
    ],

    not_found_title: "Page not found",
    not_found_message: "The page you are looking for does not exist.",

    msg_required: "is required",
    msg_too_long: "must be at most {max} characters",
    msg_invalid_email: "must be a valid email address",
    msg_invalid_phone: "must be a valid phone number",
    msg_invalid_date: "must be a valid date",
    msg_date_in_past: "cannot be in the past",
    msg_invalid_time: "must be one of the offered times",
    msg_invalid_wallet_phone: "must be an Egyptian mobile number (01XXXXXXXXX)",
    msg_invalid_choice: "must be one of the offered options",
};

static AR: Strings = Strings {
    site_name: "zeeprivate",
    nav_home: "الرئيسية",
    nav_book: "احجز جلسة",
    nav_notify: "تطبيق الجوال",
    currency: "جنيه",
    back_home: "العودة للرئيسية",
    errors_heading: "يرجى تصحيح ما يلي:",

    home_title: "تدريب ملاكمة خاص حتى باب منزلك",
    home_subtitle: "مدربون معتمدون، مواعيد مرنة، نتائج حقيقية.",
    pricing_title: "خطط تسعير مرنة",
    pricing_subtitle: "اختر الباقة التي تناسب رحلتك في الملاكمة",
    per_session: "لكل جلسة",
    sessions: "جلسات",
    book_now: "احجز الآن",
    notify_cta: "احصل على إشعار عند إطلاق تطبيقنا",

    booking_title: "احجز جلستك التدريبية",
    booking_subtitle: "املأ بياناتك واختر طريقة الدفع",
    step_personal: "المعلومات الشخصية",
    step_session: "تفاصيل الجلسة",
    step_payment: "الدفع",
    full_name: "الاسم الكامل",
    email: "البريد الإلكتروني",
    phone: "رقم الهاتف",
    address: "عنوان المنزل",
    city: "المدينة",
    preferred_date: "التاريخ المفضل",
    preferred_time: "الوقت المفضل",
    select_time: "اختر الوقت",
    session_type: "نوع الباقة",
    special_requests: "طلبات خاصة (اختياري)",
    next: "التالي",
    back: "رجوع",
    start_over: "البدء من جديد",
    order_summary: "ملخص الطلب",
    summary_package: "الباقة",
    summary_date: "التاريخ",
    summary_time: "الوقت",
    summary_total: "الإجمالي",
    payment_method: "اختر طريقة الدفع",
    card: "فيزا/ماستركارد",
    card_hint: "ادفع بأمان باستخدام بطاقتك",
    wallet: "فودافون كاش",
    wallet_hint: "ادفع باستخدام محفظتك الإلكترونية",
    wallet_phone: "رقم المحفظة",
    confirm_pay: "تأكيد والدفع",
    secure_note: "عملية الدفع آمنة ومشفرة. مدعومة من Paymob.",
    payment_unavailable: "الدفع الإلكتروني غير متاح حالياً. يرجى التواصل معنا لإتمام الحجز.",
    wallet_unavailable: "الدفع بالمحفظة غير متاح حالياً. يرجى الدفع بالبطاقة.",
    payment_failed: "تعذر بدء عملية الدفع. يرجى المحاولة مرة أخرى.",
    too_many_attempts: "محاولات دفع كثيرة. يرجى المحاولة لاحقاً.",
    card_page_title: "أكمل عملية الدفع",
    card_page_hint: "أدخل بيانات بطاقتك في النموذج الآمن أدناه.",
    wallet_pending_title: "تحقق من هاتفك",
    wallet_pending_message: "اتبع التعليمات المرسلة إلى رقم محفظتك للموافقة على الدفع.",

    notify_title: "احصل على إشعار عند إطلاق تطبيقنا",
    notify_subtitle: "كن أول من يعرف عندما يكون تطبيق zeeprivate متاحاً",
    name: "اسمك",
    name_placeholder: "أدخل اسمك",
    email_placeholder: "you@example.com",
    phone_placeholder: "+20 xxx xxx xxxx",
    notify_submit: "أبلغني",
    notify_success_title: "أنت في القائمة!",
    notify_success_message: "سنبلغك فور جاهزية تطبيقنا. استعد لتدريب الملاكمة الاحترافي أثناء التنقل!",
    notify_features: [
        "احجز المدربين فوراً من هاتفك",
        "تتبع المدرب في الوقت الحقيقي",
        "المراسلة داخل التطبيق مع مدربك",
        "خصومات حصرية للجوال فقط",
    ],

    not_found_title: "الصفحة غير موجودة",
    not_found_message: "الصفحة التي تبحث عنها غير موجودة.",

    msg_required: "مطلوب",
    msg_too_long: "يجب ألا يزيد عن {max} حرفاً",
    msg_invalid_email: "يجب أن يكون بريداً إلكترونياً صحيحاً",
    msg_invalid_phone: "يجب أن يكون رقم هاتف صحيحاً",
    msg_invalid_date: "يجب أن يكون تاريخاً صحيحاً",
    msg_date_in_past: "لا يمكن أن يكون في الماضي",
    msg_invalid_time: "يجب أن يكون أحد الأوقات المتاحة",
    msg_invalid_wallet_phone: "يجب أن يكون رقم جوال مصري (01XXXXXXXXX)",
    msg_invalid_choice: "يجب أن يكون أحد الخيارات المتاحة",
};

pub fn strings(lang: Language) -> &'static Strings {
    match lang {
        Language::En => &EN,
        Language::Ar => &AR,
    }
}

impl Strings {
    /// Label of a form field by its form name.
    pub fn field_label(&self, field: &str) -> &'static str {
        match field {
            "full_name" => self.full_name,
            "email" => self.email,
            "phone" => self.phone,
            "address" => self.address,
            "city" => self.city,
            "preferred_date" => self.preferred_date,
            "preferred_time" => self.preferred_time,
            "session_type" => self.session_type,
            "special_requests" => self.special_requests,
            "name" => self.name,
            "wallet_phone" => self.wallet_phone,
            _ => "",
        }
    }

    pub fn describe(&self, error: &FieldError) -> String {
        let message = match error.problem {
            Problem::Required => self.msg_required.to_string(),
            Problem::TooLong(max) => self.msg_too_long.replace("{max}", &max.to_string()),
            Problem::InvalidEmail => self.msg_invalid_email.to_string(),
            Problem::InvalidPhone => self.msg_invalid_phone.to_string(),
            Problem::InvalidDate => self.msg_invalid_date.to_string(),
            Problem::DateInPast => self.msg_date_in_past.to_string(),
            Problem::InvalidTime => self.msg_invalid_time.to_string(),
            Problem::InvalidWalletPhone => self.msg_invalid_wallet_phone.to_string(),
            Problem::InvalidChoice => self.msg_invalid_choice.to_string(),
        };
        format!("{} {}", self.field_label(error.field), message)
    }

    pub fn describe_all(&self, errors: &[FieldError]) -> Vec<String> {
        errors.iter().map(|e| self.describe(e)).collect()
    }

    pub fn step_label(&self, step: u8) -> &'static str {
        match step {
            1 => self.step_personal,
            2 => self.step_session,
            _ => self.step_payment,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn describes_errors_in_each_language() {
        let err = FieldError::new("email", Problem::InvalidEmail);
        assert_eq!(
            strings(Language::En).describe(&err),
            "Email Address must be a valid email address"
        );
        assert!(strings(Language::Ar).describe(&err).starts_with("البريد الإلكتروني"));
    }

    #[test]
    fn too_long_message_includes_limit() {
        let err = FieldError::new("city", Problem::TooLong(100));
        assert_eq!(
            strings(Language::En).describe(&err),
            "City must be at most 100 characters"
        );
    }
}
